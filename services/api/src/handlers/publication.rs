use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use mindora_domain::pagination::PageRequest;

use crate::auth::Identity;
use crate::error::ApiError;
use crate::handlers::responses::PublicationBody;
use crate::state::AppState;
use crate::usecase::publication::{
    CreatePublicationInput, CreatePublicationUseCase, DeletePublicationUseCase,
    ListPublicationsUseCase, UpdatePublicationUseCase,
};

// ── GET /profile/publications ────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct MyPublicationsQuery {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
}

pub async fn my_publications(
    Identity(user): Identity,
    State(state): State<AppState>,
    axum::extract::RawQuery(raw_query): axum::extract::RawQuery,
) -> Result<Json<Vec<PublicationBody>>, ApiError> {
    let query: MyPublicationsQuery = raw_query
        .as_deref()
        .map(serde_qs::from_str)
        .transpose()
        .map_err(|_| ApiError::MissingData)?
        .unwrap_or_default();

    let defaults = PageRequest::default();
    let page = PageRequest {
        per_page: query.per_page.unwrap_or(defaults.per_page),
        page: query.page.unwrap_or(defaults.page),
    };

    let usecase = ListPublicationsUseCase {
        publications: state.publication_repo(),
    };
    let publications = usecase.execute(&user, page).await?;
    Ok(Json(
        publications.iter().map(PublicationBody::from).collect(),
    ))
}

// ── POST /profile/publications ───────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreatePublicationRequest {
    pub title: String,
    pub body: String,
}

pub async fn create_publication(
    Identity(user): Identity,
    State(state): State<AppState>,
    Json(body): Json<CreatePublicationRequest>,
) -> Result<(StatusCode, Json<PublicationBody>), ApiError> {
    let usecase = CreatePublicationUseCase {
        publications: state.publication_repo(),
    };
    let publication = usecase
        .execute(
            &user,
            CreatePublicationInput {
                title: body.title,
                body: body.body,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(PublicationBody::from(&publication))))
}

// ── PATCH /profile/publications/{id} ─────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdatePublicationRequest {
    pub title: Option<String>,
    pub body: Option<String>,
}

pub async fn update_publication(
    Identity(user): Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdatePublicationRequest>,
) -> Result<StatusCode, ApiError> {
    let usecase = UpdatePublicationUseCase {
        publications: state.publication_repo(),
    };
    usecase
        .execute(&user, id, body.title.as_deref(), body.body.as_deref())
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── DELETE /profile/publications/{id} ────────────────────────────────────────

pub async fn delete_publication(
    Identity(user): Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let usecase = DeletePublicationUseCase {
        publications: state.publication_repo(),
    };
    usecase.execute(&user, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
