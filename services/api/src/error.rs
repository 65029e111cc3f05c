use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// API error variants. Ownership misses deliberately collapse into the
/// matching not-found variant so existence is never leaked.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("passwords do not match")]
    PasswordMismatch,
    #[error("invalid email address")]
    InvalidEmail,
    #[error("email taken")]
    EmailTaken,
    #[error("invalid or already-used invite code")]
    InviteCodeInvalid,
    #[error("unknown skill id")]
    UnknownSkill,
    #[error("unknown language id")]
    UnknownLanguage,
    #[error("missing data")]
    MissingData,
    #[error("missing or unreadable image file")]
    InvalidImage,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("unauthorized")]
    Unauthorized,
    #[error("forbidden")]
    Forbidden,
    #[error("user not found")]
    UserNotFound,
    #[error("therapist not found")]
    TherapistNotFound,
    #[error("profile not found")]
    ProfileNotFound,
    #[error("photo not found")]
    PhotoNotFound,
    #[error("publication not found")]
    PublicationNotFound,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::PasswordMismatch => "PASSWORD_MISMATCH",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::EmailTaken => "EMAIL_TAKEN",
            Self::InviteCodeInvalid => "INVITE_CODE_INVALID",
            Self::UnknownSkill => "UNKNOWN_SKILL",
            Self::UnknownLanguage => "UNKNOWN_LANGUAGE",
            Self::MissingData => "MISSING_DATA",
            Self::InvalidImage => "INVALID_IMAGE",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::TherapistNotFound => "THERAPIST_NOT_FOUND",
            Self::ProfileNotFound => "PROFILE_NOT_FOUND",
            Self::PhotoNotFound => "PHOTO_NOT_FOUND",
            Self::PublicationNotFound => "PUBLICATION_NOT_FOUND",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::PasswordMismatch
            | Self::InvalidEmail
            | Self::EmailTaken
            | Self::InviteCodeInvalid
            | Self::UnknownSkill
            | Self::UnknownLanguage
            | Self::MissingData
            | Self::InvalidImage => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials | Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::UserNotFound
            | Self::TherapistNotFound
            | Self::ProfileNotFound
            | Self::PhotoNotFound
            | Self::PublicationNotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status for all
        // requests. 4xx are expected client errors; logging them here would be noise.
        // Internal errors need the anyhow chain logged so the root cause is traceable.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::response::IntoResponse;

    async fn assert_error(
        error: ApiError,
        expected_status: StatusCode,
        expected_kind: &str,
        expected_message: &str,
    ) {
        let resp = error.into_response();
        assert_eq!(resp.status(), expected_status);
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["kind"], expected_kind);
        assert_eq!(json["message"], expected_message);
    }

    #[tokio::test]
    async fn should_return_password_mismatch() {
        assert_error(
            ApiError::PasswordMismatch,
            StatusCode::BAD_REQUEST,
            "PASSWORD_MISMATCH",
            "passwords do not match",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_email_taken() {
        assert_error(
            ApiError::EmailTaken,
            StatusCode::BAD_REQUEST,
            "EMAIL_TAKEN",
            "email taken",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_invite_code_invalid() {
        assert_error(
            ApiError::InviteCodeInvalid,
            StatusCode::BAD_REQUEST,
            "INVITE_CODE_INVALID",
            "invalid or already-used invite code",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_invalid_credentials() {
        assert_error(
            ApiError::InvalidCredentials,
            StatusCode::UNAUTHORIZED,
            "INVALID_CREDENTIALS",
            "invalid credentials",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_unauthorized() {
        assert_error(
            ApiError::Unauthorized,
            StatusCode::UNAUTHORIZED,
            "UNAUTHORIZED",
            "unauthorized",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_forbidden() {
        assert_error(
            ApiError::Forbidden,
            StatusCode::FORBIDDEN,
            "FORBIDDEN",
            "forbidden",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_user_not_found() {
        assert_error(
            ApiError::UserNotFound,
            StatusCode::NOT_FOUND,
            "USER_NOT_FOUND",
            "user not found",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_therapist_not_found() {
        assert_error(
            ApiError::TherapistNotFound,
            StatusCode::NOT_FOUND,
            "THERAPIST_NOT_FOUND",
            "therapist not found",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_internal() {
        assert_error(
            ApiError::Internal(anyhow::anyhow!("db error")),
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL",
            "internal error",
        )
        .await;
    }
}
