use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;

use mindora_domain::pagination::PageRequest;

use crate::auth::Identity;
use crate::error::ApiError;
use crate::handlers::responses::InviteBody;
use crate::state::AppState;
use crate::usecase::invite::{CreateInviteCodeUseCase, ListInviteCodesUseCase};

// ── POST /invite-codes ───────────────────────────────────────────────────────

pub async fn create_invite(
    Identity(user): Identity,
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<InviteBody>), ApiError> {
    let usecase = CreateInviteCodeUseCase {
        invites: state.invite_repo(),
    };
    let invite = usecase.execute(&user).await?;
    Ok((StatusCode::CREATED, Json(InviteBody::from(&invite))))
}

// ── GET /invite-codes ────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct InviteListQuery {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
}

pub async fn list_invites(
    Identity(user): Identity,
    State(state): State<AppState>,
    axum::extract::RawQuery(raw_query): axum::extract::RawQuery,
) -> Result<Json<Vec<InviteBody>>, ApiError> {
    let query: InviteListQuery = raw_query
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

    let usecase = ListInviteCodesUseCase {
        invites: state.invite_repo(),
    };
    let invites = usecase.execute(&user, page).await?;
    Ok(Json(invites.iter().map(InviteBody::from).collect()))
}
