use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::auth::Identity;
use crate::error::ApiError;
use crate::handlers::responses::AccountBody;
use crate::state::AppState;
use crate::usecase::profile::GetAccountUseCase;
use crate::usecase::register::{
    RegisterClientUseCase, RegisterInput, RegisterTherapistInput, RegisterTherapistUseCase,
};
use crate::usecase::session::{LoginInput, LoginUseCase, LogoutUseCase};

#[derive(Serialize)]
pub struct SessionResponse {
    pub token: String,
    pub user: AccountBody,
}

async fn session_response(state: &AppState, token: String, user_id: uuid::Uuid) -> Result<SessionResponse, ApiError> {
    let usecase = GetAccountUseCase {
        profiles: state.profile_repo(),
    };
    let account = usecase.execute(user_id).await?;
    Ok(SessionResponse {
        token,
        user: AccountBody::new(&account, false),
    })
}

// ── POST /auth/register/client ───────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterClientRequest {
    pub email: String,
    pub username: Option<String>,
    pub password: String,
    pub password_confirm: String,
    pub first_name: String,
    pub last_name: String,
}

impl RegisterClientRequest {
    fn into_input(self) -> RegisterInput {
        RegisterInput {
            email: self.email,
            username: self.username,
            password: self.password,
            password_confirm: self.password_confirm,
            first_name: self.first_name,
            last_name: self.last_name,
        }
    }
}

pub async fn register_client(
    State(state): State<AppState>,
    Json(body): Json<RegisterClientRequest>,
) -> Result<(StatusCode, Json<SessionResponse>), ApiError> {
    let usecase = RegisterClientUseCase {
        users: state.user_repo(),
        registrations: state.registration_port(),
        tokens: state.token_repo(),
    };
    let out = usecase.execute(body.into_input()).await?;
    let response = session_response(&state, out.token, out.user.id).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

// ── POST /auth/register/therapist ────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterTherapistRequest {
    pub email: String,
    pub username: Option<String>,
    pub password: String,
    pub password_confirm: String,
    pub invite_code: String,
    pub first_name: String,
    pub last_name: String,
}

pub async fn register_therapist(
    State(state): State<AppState>,
    Json(body): Json<RegisterTherapistRequest>,
) -> Result<(StatusCode, Json<SessionResponse>), ApiError> {
    let usecase = RegisterTherapistUseCase {
        users: state.user_repo(),
        registrations: state.registration_port(),
        tokens: state.token_repo(),
    };
    let out = usecase
        .execute(RegisterTherapistInput {
            register: RegisterInput {
                email: body.email,
                username: body.username,
                password: body.password,
                password_confirm: body.password_confirm,
                first_name: body.first_name,
                last_name: body.last_name,
            },
            invite_code: body.invite_code,
        })
        .await?;
    let response = session_response(&state, out.token, out.user.id).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

// ── POST /auth/login ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let usecase = LoginUseCase {
        users: state.user_repo(),
        tokens: state.token_repo(),
    };
    let out = usecase
        .execute(LoginInput {
            email: body.email,
            password: body.password,
        })
        .await?;
    let response = session_response(&state, out.token, out.user.id).await?;
    Ok(Json(response))
}

// ── POST /auth/logout ────────────────────────────────────────────────────────

pub async fn logout(
    Identity(user): Identity,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    let usecase = LogoutUseCase {
        tokens: state.token_repo(),
    };
    usecase.execute(user.id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── GET /auth/user ───────────────────────────────────────────────────────────

pub async fn current_user(
    Identity(user): Identity,
    State(state): State<AppState>,
) -> Result<Json<AccountBody>, ApiError> {
    let usecase = GetAccountUseCase {
        profiles: state.profile_repo(),
    };
    let account = usecase.execute(user.id).await?;
    Ok(Json(AccountBody::new(&account, false)))
}
