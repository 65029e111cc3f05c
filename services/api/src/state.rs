use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbDirectoryRepository, DbInviteCodeRepository, DbPhotoRepository, DbProfileRepository,
    DbPublicationRepository, DbReferenceRepository, DbRegistrationPort, DbTokenRepository,
    DbUserRepository,
};
use crate::infra::media::LocalMediaStore;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub media: LocalMediaStore,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn registration_port(&self) -> DbRegistrationPort {
        DbRegistrationPort {
            db: self.db.clone(),
        }
    }

    pub fn token_repo(&self) -> DbTokenRepository {
        DbTokenRepository {
            db: self.db.clone(),
        }
    }

    pub fn invite_repo(&self) -> DbInviteCodeRepository {
        DbInviteCodeRepository {
            db: self.db.clone(),
        }
    }

    pub fn directory_repo(&self) -> DbDirectoryRepository {
        DbDirectoryRepository {
            db: self.db.clone(),
        }
    }

    pub fn profile_repo(&self) -> DbProfileRepository {
        DbProfileRepository {
            db: self.db.clone(),
        }
    }

    pub fn photo_repo(&self) -> DbPhotoRepository {
        DbPhotoRepository {
            db: self.db.clone(),
        }
    }

    pub fn publication_repo(&self) -> DbPublicationRepository {
        DbPublicationRepository {
            db: self.db.clone(),
        }
    }

    pub fn reference_repo(&self) -> DbReferenceRepository {
        DbReferenceRepository {
            db: self.db.clone(),
        }
    }
}
