use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use uuid::Uuid;

use mindora_domain::pagination::PageRequest;

use crate::domain::types::DirectoryFilter;
use crate::error::ApiError;
use crate::handlers::responses::{AccountBody, ListingBody, PhotoBody, PublicationBody};
use crate::state::AppState;
use crate::usecase::directory::{GetTherapistUseCase, ListTherapistsUseCase, PublicProfileUseCase};

// ── Query params ─────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct DirectoryListQuery {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
    pub skill: Option<i32>,
    pub language: Option<i32>,
}

fn page_request(per_page: Option<u32>, page: Option<u32>) -> PageRequest {
    let defaults = PageRequest::default();
    PageRequest {
        per_page: per_page.unwrap_or(defaults.per_page),
        page: page.unwrap_or(defaults.page),
    }
}

// ── GET /therapists ──────────────────────────────────────────────────────────

pub async fn list_therapists(
    State(state): State<AppState>,
    axum::extract::RawQuery(raw_query): axum::extract::RawQuery,
) -> Result<Json<Vec<ListingBody>>, ApiError> {
    let query: DirectoryListQuery = raw_query
        .as_deref()
        .map(serde_qs::from_str)
        .transpose()
        .map_err(|_| ApiError::MissingData)?
        .unwrap_or_default();

    let usecase = ListTherapistsUseCase {
        directory: state.directory_repo(),
    };
    let listings = usecase
        .execute(
            DirectoryFilter {
                skill_id: query.skill,
                language_id: query.language,
            },
            page_request(query.per_page, query.page),
        )
        .await?;
    Ok(Json(listings.iter().map(ListingBody::from).collect()))
}

// ── GET /therapists/{id} ─────────────────────────────────────────────────────

pub async fn get_therapist(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ListingBody>, ApiError> {
    let usecase = GetTherapistUseCase {
        directory: state.directory_repo(),
    };
    let listing = usecase.execute(id).await?;
    Ok(Json(ListingBody::from(&listing)))
}

// ── GET /therapists/{id}/photos ──────────────────────────────────────────────

pub async fn therapist_photos(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<PhotoBody>>, ApiError> {
    // The visibility gate applies to owned resources too.
    let gate = GetTherapistUseCase {
        directory: state.directory_repo(),
    };
    let listing = gate.execute(id).await?;

    let photos = crate::usecase::photo::ListTherapistPhotosUseCase {
        photos: state.photo_repo(),
    };
    let items = photos.execute(&listing.user).await?;
    Ok(Json(items.iter().map(PhotoBody::from).collect()))
}

// ── GET /therapists/{id}/publications ────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct PublicationListQuery {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
}

pub async fn therapist_publications(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    axum::extract::RawQuery(raw_query): axum::extract::RawQuery,
) -> Result<Json<Vec<PublicationBody>>, ApiError> {
    let query: PublicationListQuery = raw_query
        .as_deref()
        .map(serde_qs::from_str)
        .transpose()
        .map_err(|_| ApiError::MissingData)?
        .unwrap_or_default();

    let gate = GetTherapistUseCase {
        directory: state.directory_repo(),
    };
    let listing = gate.execute(id).await?;

    let publications = crate::usecase::publication::ListPublicationsUseCase {
        publications: state.publication_repo(),
    };
    let items = publications
        .execute(&listing.user, page_request(query.per_page, query.page))
        .await?;
    Ok(Json(items.iter().map(PublicationBody::from).collect()))
}

// ── GET /profiles/{public_id} ────────────────────────────────────────────────

pub async fn public_profile(
    State(state): State<AppState>,
    Path(public_id): Path<Uuid>,
) -> Result<Json<AccountBody>, ApiError> {
    let usecase = PublicProfileUseCase {
        users: state.user_repo(),
        profiles: state.profile_repo(),
    };
    let account = usecase.execute(public_id).await?;
    Ok(Json(AccountBody::new(&account, true)))
}
