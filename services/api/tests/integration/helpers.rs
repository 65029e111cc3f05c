use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use mindora_api::domain::repository::{
    InviteCodeRepository, RegistrationPort, TokenRepository, UserRepository,
};
use mindora_api::domain::types::{InviteCode, NewRegistration, User};
use mindora_api::error::ApiError;
use mindora_domain::pagination::PageRequest;

pub struct StoredUser {
    pub user: User,
    pub password_hash: String,
}

/// Shared in-memory backend standing in for the database. Clones share the
/// same underlying tables, so one instance can serve several use cases in a
/// single test scenario.
#[derive(Clone, Default)]
pub struct MemoryStore {
    pub users: Arc<Mutex<Vec<StoredUser>>>,
    pub invites: Arc<Mutex<Vec<InviteCode>>>,
    pub tokens: Arc<Mutex<Vec<(String, Uuid)>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unused_code(code: &str) -> Self {
        let store = Self::new();
        store.invites.lock().unwrap().push(unused_invite(code));
        store
    }

    pub fn user_count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn invite(&self, code: &str) -> Option<InviteCode> {
        self.invites
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.code == code)
            .cloned()
    }
}

pub fn unused_invite(code: &str) -> InviteCode {
    InviteCode {
        id: Uuid::now_v7(),
        code: code.to_owned(),
        is_used: false,
        created_by: None,
        used_by: None,
        created_at: Utc::now(),
        used_at: None,
    }
}

impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.user.id == id)
            .map(|s| s.user.clone()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.user.email == email)
            .map(|s| s.user.clone()))
    }

    async fn find_by_public_id(&self, public_id: Uuid) -> Result<Option<User>, ApiError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.user.public_id == public_id)
            .map(|s| s.user.clone()))
    }

    async fn password_hash_by_email(&self, email: &str) -> Result<Option<String>, ApiError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.user.email == email)
            .map(|s| s.password_hash.clone()))
    }
}

impl RegistrationPort for MemoryStore {
    /// All-or-nothing under one users lock: the email check, the conditional
    /// invite claim, and the insert cannot interleave with another register.
    async fn register(&self, registration: &NewRegistration) -> Result<User, ApiError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|s| s.user.email == registration.email) {
            return Err(ApiError::EmailTaken);
        }

        if let Some(code) = &registration.invite_code {
            let mut invites = self.invites.lock().unwrap();
            let Some(invite) = invites.iter_mut().find(|i| i.code == *code && !i.is_used)
            else {
                return Err(ApiError::InviteCodeInvalid);
            };
            invite.is_used = true;
            invite.used_at = Some(Utc::now());
            invite.used_by = Some(registration.user_id);
        }

        let now = Utc::now();
        let user = User {
            id: registration.user_id,
            public_id: registration.public_id,
            email: registration.email.clone(),
            username: registration.username.clone(),
            first_name: registration.first_name.clone(),
            last_name: registration.last_name.clone(),
            role: registration.role,
            created_at: now,
            updated_at: now,
        };
        users.push(StoredUser {
            user: user.clone(),
            password_hash: registration.password_hash.clone(),
        });
        Ok(user)
    }
}

impl TokenRepository for MemoryStore {
    async fn fetch_or_create(&self, user_id: Uuid, candidate: &str) -> Result<String, ApiError> {
        let mut tokens = self.tokens.lock().unwrap();
        if let Some((key, _)) = tokens.iter().find(|(_, id)| *id == user_id) {
            return Ok(key.clone());
        }
        tokens.push((candidate.to_owned(), user_id));
        Ok(candidate.to_owned())
    }

    async fn find_user_id(&self, key: &str) -> Result<Option<Uuid>, ApiError> {
        Ok(self
            .tokens
            .lock()
            .unwrap()
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, id)| *id))
    }

    async fn revoke(&self, user_id: Uuid) -> Result<bool, ApiError> {
        let mut tokens = self.tokens.lock().unwrap();
        let before = tokens.len();
        tokens.retain(|(_, id)| *id != user_id);
        Ok(tokens.len() < before)
    }
}

impl InviteCodeRepository for MemoryStore {
    async fn create(&self, invite: &InviteCode) -> Result<(), ApiError> {
        self.invites.lock().unwrap().push(invite.clone());
        Ok(())
    }

    async fn list(&self, _page: PageRequest) -> Result<Vec<InviteCode>, ApiError> {
        Ok(self.invites.lock().unwrap().clone())
    }
}
