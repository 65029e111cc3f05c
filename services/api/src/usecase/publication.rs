use chrono::Utc;
use uuid::Uuid;

use mindora_domain::pagination::PageRequest;

use crate::domain::repository::PublicationRepository;
use crate::domain::types::{Publication, User};
use crate::error::ApiError;

// ── ListPublications ─────────────────────────────────────────────────────────

/// Serves both the author's own listing and the public per-therapist listing.
pub struct ListPublicationsUseCase<P: PublicationRepository> {
    pub publications: P,
}

impl<P: PublicationRepository> ListPublicationsUseCase<P> {
    pub async fn execute(
        &self,
        author: &User,
        page: PageRequest,
    ) -> Result<Vec<Publication>, ApiError> {
        if !author.role.is_therapist() {
            return Err(ApiError::ProfileNotFound);
        }
        self.publications
            .list_by_author(author.id, page.clamped())
            .await
    }
}

// ── CreatePublication ────────────────────────────────────────────────────────

pub struct CreatePublicationInput {
    pub title: String,
    pub body: String,
}

pub struct CreatePublicationUseCase<P: PublicationRepository> {
    pub publications: P,
}

impl<P: PublicationRepository> CreatePublicationUseCase<P> {
    pub async fn execute(
        &self,
        caller: &User,
        input: CreatePublicationInput,
    ) -> Result<Publication, ApiError> {
        if !caller.role.is_therapist() {
            return Err(ApiError::ProfileNotFound);
        }
        if input.title.is_empty() || input.body.is_empty() {
            return Err(ApiError::MissingData);
        }

        let now = Utc::now();
        let publication = Publication {
            id: Uuid::now_v7(),
            author_id: caller.id,
            title: input.title,
            body: input.body,
            created_at: now,
            updated_at: now,
        };
        self.publications.create(&publication).await?;
        Ok(publication)
    }
}

// ── UpdatePublication ────────────────────────────────────────────────────────

pub struct UpdatePublicationUseCase<P: PublicationRepository> {
    pub publications: P,
}

impl<P: PublicationRepository> UpdatePublicationUseCase<P> {
    /// Another author's publication id is the same 404 as a nonexistent one.
    pub async fn execute(
        &self,
        caller: &User,
        publication_id: Uuid,
        title: Option<&str>,
        body: Option<&str>,
    ) -> Result<(), ApiError> {
        if title.is_none() && body.is_none() {
            return Err(ApiError::MissingData);
        }
        let updated = self
            .publications
            .update(publication_id, caller.id, title, body)
            .await?;
        if !updated {
            return Err(ApiError::PublicationNotFound);
        }
        Ok(())
    }
}

// ── DeletePublication ────────────────────────────────────────────────────────

pub struct DeletePublicationUseCase<P: PublicationRepository> {
    pub publications: P,
}

impl<P: PublicationRepository> DeletePublicationUseCase<P> {
    pub async fn execute(&self, caller: &User, publication_id: Uuid) -> Result<(), ApiError> {
        let deleted = self.publications.delete(publication_id, caller.id).await?;
        if !deleted {
            return Err(ApiError::PublicationNotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use mindora_domain::role::AccountRole;

    struct MockPublicationRepo {
        publications: Mutex<Vec<Publication>>,
    }

    impl MockPublicationRepo {
        fn empty() -> Self {
            Self {
                publications: Mutex::new(vec![]),
            }
        }
    }

    impl PublicationRepository for MockPublicationRepo {
        async fn list_by_author(
            &self,
            author_id: Uuid,
            _page: PageRequest,
        ) -> Result<Vec<Publication>, ApiError> {
            Ok(self
                .publications
                .lock()
                .unwrap()
                .iter()
                .filter(|p| p.author_id == author_id)
                .cloned()
                .collect())
        }
        async fn create(&self, publication: &Publication) -> Result<(), ApiError> {
            self.publications.lock().unwrap().push(publication.clone());
            Ok(())
        }
        async fn update(
            &self,
            id: Uuid,
            author_id: Uuid,
            title: Option<&str>,
            body: Option<&str>,
        ) -> Result<bool, ApiError> {
            let mut publications = self.publications.lock().unwrap();
            let Some(publication) = publications
                .iter_mut()
                .find(|p| p.id == id && p.author_id == author_id)
            else {
                return Ok(false);
            };
            if let Some(title) = title {
                publication.title = title.to_owned();
            }
            if let Some(body) = body {
                publication.body = body.to_owned();
            }
            Ok(true)
        }
        async fn delete(&self, id: Uuid, author_id: Uuid) -> Result<bool, ApiError> {
            let mut publications = self.publications.lock().unwrap();
            let before = publications.len();
            publications.retain(|p| !(p.id == id && p.author_id == author_id));
            Ok(publications.len() < before)
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

    #[tokio::test]
    async fn should_create_publication_for_therapist() {
        let uc = CreatePublicationUseCase {
            publications: MockPublicationRepo::empty(),
        };
        let caller = test_user(AccountRole::Therapist);
        let publication = uc
            .execute(
                &caller,
                CreatePublicationInput {
                    title: "On burnout".to_owned(),
                    body: "...".to_owned(),
                },
            )
            .await
            .unwrap();
        assert_eq!(publication.author_id, caller.id);
    }

    #[tokio::test]
    async fn should_reject_publication_from_client() {
        let uc = CreatePublicationUseCase {
            publications: MockPublicationRepo::empty(),
        };
        let result = uc
            .execute(
                &test_user(AccountRole::Client),
                CreatePublicationInput {
                    title: "t".to_owned(),
                    body: "b".to_owned(),
                },
            )
            .await;
        assert!(matches!(result, Err(ApiError::ProfileNotFound)));
    }

    #[tokio::test]
    async fn should_reject_empty_title_or_body() {
        let uc = CreatePublicationUseCase {
            publications: MockPublicationRepo::empty(),
        };
        let caller = test_user(AccountRole::Therapist);
        let result = uc
            .execute(
                &caller,
                CreatePublicationInput {
                    title: String::new(),
                    body: "b".to_owned(),
                },
            )
            .await;
        assert!(matches!(result, Err(ApiError::MissingData)));
    }

    #[tokio::test]
    async fn should_404_update_of_foreign_publication() {
        let author = test_user(AccountRole::Therapist);
        let repo = MockPublicationRepo::empty();
        let create = CreatePublicationUseCase { publications: repo };
        let publication = create
            .execute(
                &author,
                CreatePublicationInput {
                    title: "t".to_owned(),
                    body: "b".to_owned(),
                },
            )
            .await
            .unwrap();

        let uc = UpdatePublicationUseCase {
            publications: create.publications,
        };
        let stranger = test_user(AccountRole::Therapist);
        let result = uc
            .execute(&stranger, publication.id, Some("hijack"), None)
            .await;
        assert!(matches!(result, Err(ApiError::PublicationNotFound)));
    }

    #[tokio::test]
    async fn should_delete_own_publication() {
        let author = test_user(AccountRole::Therapist);
        let repo = MockPublicationRepo::empty();
        let create = CreatePublicationUseCase { publications: repo };
        let publication = create
            .execute(
                &author,
                CreatePublicationInput {
                    title: "t".to_owned(),
                    body: "b".to_owned(),
                },
            )
            .await
            .unwrap();

        let uc = DeletePublicationUseCase {
            publications: create.publications,
        };
        uc.execute(&author, publication.id).await.unwrap();
        let result = uc.execute(&author, publication.id).await;
        assert!(matches!(result, Err(ApiError::PublicationNotFound)));
    }
}
