use chrono::Utc;
use rand::RngExt;
use uuid::Uuid;

use mindora_domain::pagination::PageRequest;

use crate::domain::repository::InviteCodeRepository;
use crate::domain::types::{InviteCode, User};
use crate::error::ApiError;

const INVITE_CODE_LEN: usize = 12;

/// Charset for generated invite codes (uppercase alphanumeric).
const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

fn generate_code() -> String {
    let mut rng = rand::rng();
    (0..INVITE_CODE_LEN)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

// ── CreateInviteCode ─────────────────────────────────────────────────────────

pub struct CreateInviteCodeUseCase<I: InviteCodeRepository> {
    pub invites: I,
}

impl<I: InviteCodeRepository> CreateInviteCodeUseCase<I> {
    /// Admin only. The generated code is returned once; consumption happens
    /// in the registration transaction.
    pub async fn execute(&self, actor: &User) -> Result<InviteCode, ApiError> {
        if actor.role != mindora_domain::role::AccountRole::Admin {
            return Err(ApiError::Forbidden);
        }

        let invite = InviteCode {
            id: Uuid::now_v7(),
            code: generate_code(),
            is_used: false,
            created_by: Some(actor.id),
            used_by: None,
            created_at: Utc::now(),
            used_at: None,
        };
        self.invites.create(&invite).await?;
        Ok(invite)
    }
}

// ── ListInviteCodes ──────────────────────────────────────────────────────────

pub struct ListInviteCodesUseCase<I: InviteCodeRepository> {
    pub invites: I,
}

impl<I: InviteCodeRepository> ListInviteCodesUseCase<I> {
    pub async fn execute(
        &self,
        actor: &User,
        page: PageRequest,
    ) -> Result<Vec<InviteCode>, ApiError> {
        if actor.role != mindora_domain::role::AccountRole::Admin {
            return Err(ApiError::Forbidden);
        }
        self.invites.list(page.clamped()).await
    }
}
