use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::{MediaStore, PhotoRepository};
use crate::domain::types::{TherapistPhoto, User};
use crate::error::ApiError;

// ── ListTherapistPhotos ──────────────────────────────────────────────────────

/// Serves both the owner's gallery view and the public per-therapist listing.
pub struct ListTherapistPhotosUseCase<P: PhotoRepository> {
    pub photos: P,
}

impl<P: PhotoRepository> ListTherapistPhotosUseCase<P> {
    pub async fn execute(&self, therapist: &User) -> Result<Vec<TherapistPhoto>, ApiError> {
        if !therapist.role.is_therapist() {
            return Err(ApiError::ProfileNotFound);
        }
        self.photos.list_by_therapist(therapist.id).await
    }
}

// ── AddPhoto ─────────────────────────────────────────────────────────────────

pub struct AddPhotoInput {
    pub filename: String,
    pub bytes: Vec<u8>,
    pub caption: String,
    pub position: i32,
}

pub struct AddPhotoUseCase<M: MediaStore, P: PhotoRepository> {
    pub media: M,
    pub photos: P,
}

impl<M: MediaStore, P: PhotoRepository> AddPhotoUseCase<M, P> {
    pub async fn execute(
        &self,
        caller: &User,
        input: AddPhotoInput,
    ) -> Result<TherapistPhoto, ApiError> {
        if !caller.role.is_therapist() {
            return Err(ApiError::ProfileNotFound);
        }
        if input.bytes.is_empty() {
            return Err(ApiError::InvalidImage);
        }

        let image_path = self
            .media
            .store("photos", &input.filename, &input.bytes)
            .await?;
        let photo = TherapistPhoto {
            id: Uuid::now_v7(),
            therapist_id: caller.id,
            image_path,
            caption: input.caption,
            position: input.position,
            created_at: Utc::now(),
        };
        self.photos.create(&photo).await?;
        Ok(photo)
    }
}

// ── UpdatePhoto ──────────────────────────────────────────────────────────────

pub struct UpdatePhotoUseCase<P: PhotoRepository> {
    pub photos: P,
}

impl<P: PhotoRepository> UpdatePhotoUseCase<P> {
    /// Another therapist's photo id is the same 404 as a nonexistent one.
    pub async fn execute(
        &self,
        caller: &User,
        photo_id: Uuid,
        caption: Option<&str>,
        position: Option<i32>,
    ) -> Result<(), ApiError> {
        if caption.is_none() && position.is_none() {
            return Err(ApiError::MissingData);
        }
        let updated = self
            .photos
            .update(photo_id, caller.id, caption, position)
            .await?;
        if !updated {
            return Err(ApiError::PhotoNotFound);
        }
        Ok(())
    }
}

// ── DeletePhoto ──────────────────────────────────────────────────────────────

pub struct DeletePhotoUseCase<P: PhotoRepository> {
    pub photos: P,
}

impl<P: PhotoRepository> DeletePhotoUseCase<P> {
    pub async fn execute(&self, caller: &User, photo_id: Uuid) -> Result<(), ApiError> {
        let deleted = self.photos.delete(photo_id, caller.id).await?;
        if !deleted {
            return Err(ApiError::PhotoNotFound);
        }
        Ok(())
    }
}
