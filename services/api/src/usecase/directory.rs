use uuid::Uuid;

use mindora_domain::pagination::PageRequest;

use crate::domain::repository::{DirectoryRepository, ProfileRepository, UserRepository};
use crate::domain::types::{Account, DirectoryFilter, RoleProfile, TherapistListing};
use crate::error::ApiError;

// ── ListTherapists ───────────────────────────────────────────────────────────

pub struct ListTherapistsUseCase<D: DirectoryRepository> {
    pub directory: D,
}

impl<D: DirectoryRepository> ListTherapistsUseCase<D> {
    pub async fn execute(
        &self,
        filter: DirectoryFilter,
        page: PageRequest,
    ) -> Result<Vec<TherapistListing>, ApiError> {
        self.directory.list_visible(filter, page.clamped()).await
    }
}

// ── GetTherapist ─────────────────────────────────────────────────────────────

pub struct GetTherapistUseCase<D: DirectoryRepository> {
    pub directory: D,
}

impl<D: DirectoryRepository> GetTherapistUseCase<D> {
    /// A known but non-qualifying therapist is the same 404 as an unknown id.
    pub async fn execute(&self, user_id: Uuid) -> Result<TherapistListing, ApiError> {
        self.directory
            .get_visible(user_id)
            .await?
            .ok_or(ApiError::TherapistNotFound)
    }
}

// ── PublicProfile ────────────────────────────────────────────────────────────

pub struct PublicProfileUseCase<U: UserRepository, P: ProfileRepository> {
    pub users: U,
    pub profiles: P,
}

impl<U: UserRepository, P: ProfileRepository> PublicProfileUseCase<U, P> {
    /// Clients, unverified therapists, and unknown public ids all produce the
    /// identical 404 so verification status cannot be probed.
    pub async fn execute(&self, public_id: Uuid) -> Result<Account, ApiError> {
        let user = self
            .users
            .find_by_public_id(public_id)
            .await?
            .ok_or(ApiError::UserNotFound)?;
        let account = self
            .profiles
            .load_account(user.id)
            .await?
            .ok_or(ApiError::UserNotFound)?;
        match &account.role_profile {
            RoleProfile::Therapist(profile) if profile.is_verified => Ok(account),
            _ => Err(ApiError::UserNotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::Utc;
    use mindora_domain::role::{AccountRole, TherapistStatus};

    use crate::domain::types::{BaseProfile, ClientProfile, TherapistProfile, User};

    struct MockDirectoryRepo {
        listings: Vec<TherapistListing>,
    }

    impl DirectoryRepository for MockDirectoryRepo {
        async fn list_visible(
            &self,
            _filter: DirectoryFilter,
            _page: PageRequest,
        ) -> Result<Vec<TherapistListing>, ApiError> {
            Ok(self.listings.clone())
        }
        async fn get_visible(
            &self,
            user_id: Uuid,
        ) -> Result<Option<TherapistListing>, ApiError> {
            Ok(self
                .listings
                .iter()
                .find(|l| l.user.id == user_id)
                .cloned())
        }
    }

    struct MockUserRepo {
        user: Option<User>,
    }

    impl UserRepository for MockUserRepo {
        async fn find_by_id(&self, _id: Uuid) -> Result<Option<User>, ApiError> {
            Ok(self.user.clone())
        }
        async fn find_by_email(&self, _email: &str) -> Result<Option<User>, ApiError> {
            Ok(self.user.clone())
        }
        async fn find_by_public_id(&self, public_id: Uuid) -> Result<Option<User>, ApiError> {
            Ok(self.user.clone().filter(|u| u.public_id == public_id))
        }
        async fn password_hash_by_email(&self, _email: &str) -> Result<Option<String>, ApiError> {
            Ok(None)
        }
    }

    struct MockProfileRepo {
        account: Option<Account>,
    }

    impl ProfileRepository for MockProfileRepo {
        async fn load_account(&self, _user_id: Uuid) -> Result<Option<Account>, ApiError> {
            Ok(self.account.clone())
        }
        async fn update_base(
            &self,
            _user_id: Uuid,
            _first_name: Option<&str>,
            _last_name: Option<&str>,
            _gender: Option<mindora_domain::role::Gender>,
        ) -> Result<(), ApiError> {
            Ok(())
        }
        async fn update_avatar(&self, _user_id: Uuid, _path: &str) -> Result<(), ApiError> {
            Ok(())
        }
        async fn update_therapist(
            &self,
            _user_id: Uuid,
            _fields: crate::domain::repository::TherapistProfileUpdate<'_>,
        ) -> Result<bool, ApiError> {
            Ok(false)
        }
        async fn update_client(
            &self,
            _user_id: Uuid,
            _fields: crate::domain::repository::ClientProfileUpdate<'_>,
        ) -> Result<bool, ApiError> {
            Ok(false)
        }
    }

    fn test_user(role: AccountRole) -> User {
        let now = Utc::now();
        User {
            id: Uuid::now_v7(),
            public_id: Uuid::new_v4(),
            email: "t@example.com".to_owned(),
            username: "t@example.com".to_owned(),
            first_name: "T".to_owned(),
            last_name: "U".to_owned(),
            role,
            created_at: now,
            updated_at: now,
        }
    }

    fn test_base(user_id: Uuid) -> BaseProfile {
        let now = Utc::now();
        BaseProfile {
            user_id,
            gender: None,
            avatar_path: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn test_therapist_profile(user_id: Uuid, is_verified: bool) -> TherapistProfile {
        let now = Utc::now();
        TherapistProfile {
            user_id,
            bio: String::new(),
            experience_years: 3,
            status: TherapistStatus::Active,
            is_verified,
            is_subscribed: is_verified,
            total_hours_worked: 0,
            display_hours: false,
            skills: vec![],
            languages: vec![],
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn should_return_404_for_unlisted_therapist() {
        let uc = GetTherapistUseCase {
            directory: MockDirectoryRepo { listings: vec![] },
        };
        let result = uc.execute(Uuid::now_v7()).await;
        assert!(matches!(result, Err(ApiError::TherapistNotFound)));
    }

    #[tokio::test]
    async fn should_return_listed_therapist() {
        let user = test_user(AccountRole::Therapist);
        let listing = TherapistListing {
            base: test_base(user.id),
            profile: test_therapist_profile(user.id, true),
            user: user.clone(),
        };
        let uc = GetTherapistUseCase {
            directory: MockDirectoryRepo {
                listings: vec![listing],
            },
        };
        let found = uc.execute(user.id).await.unwrap();
        assert_eq!(found.user.id, user.id);
    }

    #[tokio::test]
    async fn should_serve_public_profile_of_verified_therapist() {
        let user = test_user(AccountRole::Therapist);
        let account = Account {
            base: test_base(user.id),
            role_profile: RoleProfile::Therapist(test_therapist_profile(user.id, true)),
            user: user.clone(),
        };
        let uc = PublicProfileUseCase {
            users: MockUserRepo {
                user: Some(user.clone()),
            },
            profiles: MockProfileRepo {
                account: Some(account),
            },
        };
        let found = uc.execute(user.public_id).await.unwrap();
        assert_eq!(found.user.public_id, user.public_id);
    }

    #[tokio::test]
    async fn should_hide_unverified_therapist_behind_same_404() {
        let user = test_user(AccountRole::Therapist);
        let account = Account {
            base: test_base(user.id),
            role_profile: RoleProfile::Therapist(test_therapist_profile(user.id, false)),
            user: user.clone(),
        };
        let uc = PublicProfileUseCase {
            users: MockUserRepo {
                user: Some(user.clone()),
            },
            profiles: MockProfileRepo {
                account: Some(account),
            },
        };
        let result = uc.execute(user.public_id).await;
        assert!(matches!(result, Err(ApiError::UserNotFound)));
    }

    #[tokio::test]
    async fn should_hide_client_accounts_behind_same_404() {
        let user = test_user(AccountRole::Client);
        let account = Account {
            base: test_base(user.id),
            role_profile: RoleProfile::Client(ClientProfile {
                user_id: user.id,
                request_text: String::new(),
                interests: vec![],
                created_at: Utc::now(),
                updated_at: Utc::now(),
            }),
            user: user.clone(),
        };
        let uc = PublicProfileUseCase {
            users: MockUserRepo {
                user: Some(user.clone()),
            },
            profiles: MockProfileRepo {
                account: Some(account),
            },
        };
        let result = uc.execute(user.public_id).await;
        assert!(matches!(result, Err(ApiError::UserNotFound)));
    }

    #[tokio::test]
    async fn should_404_unknown_public_id() {
        let uc = PublicProfileUseCase {
            users: MockUserRepo { user: None },
            profiles: MockProfileRepo { account: None },
        };
        let result = uc.execute(Uuid::new_v4()).await;
        assert!(matches!(result, Err(ApiError::UserNotFound)));
    }
}
