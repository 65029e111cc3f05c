use axum::{
    Json,
    extract::{Multipart, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use mindora_domain::role::{Gender, TherapistStatus};

use crate::auth::Identity;
use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::profile::{
    UpdateAvatarUseCase, UpdateBaseProfileInput, UpdateBaseProfileUseCase,
    UpdateClientProfileInput, UpdateClientProfileUseCase, UpdateTherapistProfileInput,
    UpdateTherapistProfileUseCase,
};

// ── PATCH /profile/base ──────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateBaseRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<Gender>,
}

pub async fn update_base(
    Identity(user): Identity,
    State(state): State<AppState>,
    Json(body): Json<UpdateBaseRequest>,
) -> Result<StatusCode, ApiError> {
    let usecase = UpdateBaseProfileUseCase {
        profiles: state.profile_repo(),
    };
    usecase
        .execute(
            user.id,
            UpdateBaseProfileInput {
                first_name: body.first_name,
                last_name: body.last_name,
                gender: body.gender,
            },
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── PUT /profile/avatar ──────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct AvatarResponse {
    pub avatar_url: String,
}

pub async fn update_avatar(
    Identity(user): Identity,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AvatarResponse>, ApiError> {
    let mut upload: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::InvalidImage)?
    {
        if field.name() == Some("avatar") {
            let filename = field.file_name().unwrap_or("avatar").to_owned();
            let bytes = field.bytes().await.map_err(|_| ApiError::InvalidImage)?;
            upload = Some((filename, bytes.to_vec()));
        }
    }
    let (filename, bytes) = upload.ok_or(ApiError::InvalidImage)?;

    let usecase = UpdateAvatarUseCase {
        media: state.media.clone(),
        profiles: state.profile_repo(),
    };
    let avatar_url = usecase.execute(user.id, &filename, &bytes).await?;
    Ok(Json(AvatarResponse { avatar_url }))
}

// ── PATCH /profile/therapist ─────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateTherapistRequest {
    pub bio: Option<String>,
    pub experience_years: Option<i32>,
    pub status: Option<TherapistStatus>,
    pub display_hours: Option<bool>,
    pub skill_ids: Option<Vec<i32>>,
    pub language_ids: Option<Vec<i32>>,
}

pub async fn update_therapist(
    Identity(user): Identity,
    State(state): State<AppState>,
    Json(body): Json<UpdateTherapistRequest>,
) -> Result<StatusCode, ApiError> {
    let usecase = UpdateTherapistProfileUseCase {
        profiles: state.profile_repo(),
        reference: state.reference_repo(),
    };
    usecase
        .execute(
            user.id,
            UpdateTherapistProfileInput {
                bio: body.bio,
                experience_years: body.experience_years,
                status: body.status,
                display_hours: body.display_hours,
                skill_ids: body.skill_ids,
                language_ids: body.language_ids,
            },
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── PATCH /profile/client ────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateClientRequest {
    pub request_text: Option<String>,
    pub interest_ids: Option<Vec<i32>>,
}

pub async fn update_client(
    Identity(user): Identity,
    State(state): State<AppState>,
    Json(body): Json<UpdateClientRequest>,
) -> Result<StatusCode, ApiError> {
    let usecase = UpdateClientProfileUseCase {
        profiles: state.profile_repo(),
        reference: state.reference_repo(),
    };
    usecase
        .execute(
            user.id,
            UpdateClientProfileInput {
                request_text: body.request_text,
                interest_ids: body.interest_ids,
            },
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
