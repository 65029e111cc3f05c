use uuid::Uuid;

use mindora_domain::role::{Gender, TherapistStatus};

use crate::domain::repository::{
    ClientProfileUpdate, MediaStore, ProfileRepository, ReferenceRepository,
    TherapistProfileUpdate,
};
use crate::domain::types::Account;
use crate::error::ApiError;

// ── GetAccount ───────────────────────────────────────────────────────────────

pub struct GetAccountUseCase<P: ProfileRepository> {
    pub profiles: P,
}

impl<P: ProfileRepository> GetAccountUseCase<P> {
    pub async fn execute(&self, user_id: Uuid) -> Result<Account, ApiError> {
        self.profiles
            .load_account(user_id)
            .await?
            .ok_or(ApiError::UserNotFound)
    }
}

// ── UpdateBaseProfile ────────────────────────────────────────────────────────

pub struct UpdateBaseProfileInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<Gender>,
}

pub struct UpdateBaseProfileUseCase<P: ProfileRepository> {
    pub profiles: P,
}

impl<P: ProfileRepository> UpdateBaseProfileUseCase<P> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        input: UpdateBaseProfileInput,
    ) -> Result<(), ApiError> {
        if input.first_name.is_none() && input.last_name.is_none() && input.gender.is_none() {
            return Err(ApiError::MissingData);
        }
        self.profiles
            .update_base(
                user_id,
                input.first_name.as_deref(),
                input.last_name.as_deref(),
                input.gender,
            )
            .await
    }
}

// ── UpdateAvatar ─────────────────────────────────────────────────────────────

pub struct UpdateAvatarUseCase<M: MediaStore, P: ProfileRepository> {
    pub media: M,
    pub profiles: P,
}

impl<M: MediaStore, P: ProfileRepository> UpdateAvatarUseCase<M, P> {
    /// Stores the new image first, then swaps the reference. Returns the new
    /// avatar URL.
    pub async fn execute(
        &self,
        user_id: Uuid,
        filename: &str,
        bytes: &[u8],
    ) -> Result<String, ApiError> {
        if bytes.is_empty() {
            return Err(ApiError::InvalidImage);
        }
        let path = self.media.store("avatars", filename, bytes).await?;
        self.profiles.update_avatar(user_id, &path).await?;
        Ok(path)
    }
}

// ── UpdateTherapistProfile ───────────────────────────────────────────────────

pub struct UpdateTherapistProfileInput {
    pub bio: Option<String>,
    pub experience_years: Option<i32>,
    pub status: Option<TherapistStatus>,
    pub display_hours: Option<bool>,
    pub skill_ids: Option<Vec<i32>>,
    pub language_ids: Option<Vec<i32>>,
}

pub struct UpdateTherapistProfileUseCase<P: ProfileRepository, R: ReferenceRepository> {
    pub profiles: P,
    pub reference: R,
}

impl<P: ProfileRepository, R: ReferenceRepository> UpdateTherapistProfileUseCase<P, R> {
    /// Gating fields (`is_verified`, `is_subscribed`) are not in the input
    /// shape at all; they cannot be touched from here.
    pub async fn execute(
        &self,
        user_id: Uuid,
        input: UpdateTherapistProfileInput,
    ) -> Result<(), ApiError> {
        if input.bio.is_none()
            && input.experience_years.is_none()
            && input.status.is_none()
            && input.display_hours.is_none()
            && input.skill_ids.is_none()
            && input.language_ids.is_none()
        {
            return Err(ApiError::MissingData);
        }

        let skill_ids = input.skill_ids.map(dedup);
        let language_ids = input.language_ids.map(dedup);
        if let Some(ids) = &skill_ids {
            if !self.reference.skills_exist(ids).await? {
                return Err(ApiError::UnknownSkill);
            }
        }
        if let Some(ids) = &language_ids {
            if !self.reference.languages_exist(ids).await? {
                return Err(ApiError::UnknownLanguage);
            }
        }

        let updated = self
            .profiles
            .update_therapist(
                user_id,
                TherapistProfileUpdate {
                    bio: input.bio.as_deref(),
                    experience_years: input.experience_years,
                    status: input.status,
                    display_hours: input.display_hours,
                    skill_ids: skill_ids.as_deref(),
                    language_ids: language_ids.as_deref(),
                },
            )
            .await?;
        if !updated {
            // The caller is not a therapist; do not reveal more than that.
            return Err(ApiError::ProfileNotFound);
        }
        Ok(())
    }
}

// ── UpdateClientProfile ──────────────────────────────────────────────────────

pub struct UpdateClientProfileInput {
    pub request_text: Option<String>,
    pub interest_ids: Option<Vec<i32>>,
}

pub struct UpdateClientProfileUseCase<P: ProfileRepository, R: ReferenceRepository> {
    pub profiles: P,
    pub reference: R,
}

impl<P: ProfileRepository, R: ReferenceRepository> UpdateClientProfileUseCase<P, R> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        input: UpdateClientProfileInput,
    ) -> Result<(), ApiError> {
        if input.request_text.is_none() && input.interest_ids.is_none() {
            return Err(ApiError::MissingData);
        }

        let interest_ids = input.interest_ids.map(dedup);
        if let Some(ids) = &interest_ids {
            if !self.reference.skills_exist(ids).await? {
                return Err(ApiError::UnknownSkill);
            }
        }

        let updated = self
            .profiles
            .update_client(
                user_id,
                ClientProfileUpdate {
                    request_text: input.request_text.as_deref(),
                    interest_ids: interest_ids.as_deref(),
                },
            )
            .await?;
        if !updated {
            return Err(ApiError::ProfileNotFound);
        }
        Ok(())
    }
}

fn dedup(mut ids: Vec<i32>) -> Vec<i32> {
    ids.sort_unstable();
    ids.dedup();
    ids
}
