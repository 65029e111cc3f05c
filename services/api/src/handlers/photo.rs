use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::Identity;
use crate::error::ApiError;
use crate::handlers::responses::PhotoBody;
use crate::state::AppState;
use crate::usecase::photo::{
    AddPhotoInput, AddPhotoUseCase, DeletePhotoUseCase, ListTherapistPhotosUseCase,
    UpdatePhotoUseCase,
};

// ── GET /profile/photos ──────────────────────────────────────────────────────

pub async fn my_photos(
    Identity(user): Identity,
    State(state): State<AppState>,
) -> Result<Json<Vec<PhotoBody>>, ApiError> {
    let usecase = ListTherapistPhotosUseCase {
        photos: state.photo_repo(),
    };
    let photos = usecase.execute(&user).await?;
    Ok(Json(photos.iter().map(PhotoBody::from).collect()))
}

// ── POST /profile/photos ─────────────────────────────────────────────────────

pub async fn add_photo(
    Identity(user): Identity,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<PhotoBody>), ApiError> {
    let mut upload: Option<(String, Vec<u8>)> = None;
    let mut caption = String::new();
    let mut position = 0;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::InvalidImage)?
    {
        match field.name() {
            Some("image") => {
                let filename = field.file_name().unwrap_or("photo").to_owned();
                let bytes = field.bytes().await.map_err(|_| ApiError::InvalidImage)?;
                upload = Some((filename, bytes.to_vec()));
            }
            Some("caption") => {
                caption = field.text().await.map_err(|_| ApiError::MissingData)?;
            }
            Some("position") => {
                position = field
                    .text()
                    .await
                    .map_err(|_| ApiError::MissingData)?
                    .parse()
                    .map_err(|_| ApiError::MissingData)?;
            }
            _ => {}
        }
    }
    let (filename, bytes) = upload.ok_or(ApiError::InvalidImage)?;

    let usecase = AddPhotoUseCase {
        media: state.media.clone(),
        photos: state.photo_repo(),
    };
    let photo = usecase
        .execute(
            &user,
            AddPhotoInput {
                filename,
                bytes,
                caption,
                position,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(PhotoBody::from(&photo))))
}

// ── PATCH /profile/photos/{id} ───────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdatePhotoRequest {
    pub caption: Option<String>,
    pub position: Option<i32>,
}

pub async fn update_photo(
    Identity(user): Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdatePhotoRequest>,
) -> Result<StatusCode, ApiError> {
    let usecase = UpdatePhotoUseCase {
        photos: state.photo_repo(),
    };
    usecase
        .execute(&user, id, body.caption.as_deref(), body.position)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── DELETE /profile/photos/{id} ──────────────────────────────────────────────

pub async fn delete_photo(
    Identity(user): Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let usecase = DeletePhotoUseCase {
        photos: state.photo_repo(),
    };
    usecase.execute(&user, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
