use uuid::Uuid;

use mindora_domain::role::AccountRole;

use crate::domain::repository::{RegistrationPort, TokenRepository, UserRepository};
use crate::domain::types::{NewRegistration, User, validate_email};
use crate::error::ApiError;
use crate::usecase::password::hash_password;
use crate::usecase::session::generate_token_key;

/// Shared request shape of both registration paths.
pub struct RegisterInput {
    pub email: String,
    pub username: Option<String>,
    pub password: String,
    pub password_confirm: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug)]
pub struct RegisterOutput {
    pub token: String,
    pub user: User,
}

/// Validate the shared fields and assemble the registration record.
/// No side effects; everything that mutates happens in [`RegistrationPort`].
fn prepare_registration(
    input: &RegisterInput,
    role: AccountRole,
    invite_code: Option<String>,
) -> Result<NewRegistration, ApiError> {
    if input.password != input.password_confirm {
        return Err(ApiError::PasswordMismatch);
    }
    if !validate_email(&input.email) {
        return Err(ApiError::InvalidEmail);
    }
    let username = input
        .username
        .clone()
        .filter(|u| !u.is_empty())
        .unwrap_or_else(|| input.email.clone());

    Ok(NewRegistration {
        user_id: Uuid::now_v7(),
        public_id: Uuid::new_v4(),
        email: input.email.clone(),
        username,
        password_hash: hash_password(&input.password)?,
        first_name: input.first_name.clone(),
        last_name: input.last_name.clone(),
        role,
        invite_code,
    })
}

// ── RegisterClient ───────────────────────────────────────────────────────────

pub struct RegisterClientUseCase<U, R, T>
where
    U: UserRepository,
    R: RegistrationPort,
    T: TokenRepository,
{
    pub users: U,
    pub registrations: R,
    pub tokens: T,
}

impl<U, R, T> RegisterClientUseCase<U, R, T>
where
    U: UserRepository,
    R: RegistrationPort,
    T: TokenRepository,
{
    pub async fn execute(&self, input: RegisterInput) -> Result<RegisterOutput, ApiError> {
        let registration = prepare_registration(&input, AccountRole::Client, None)?;
        if self
            .users
            .find_by_email(&registration.email)
            .await?
            .is_some()
        {
            return Err(ApiError::EmailTaken);
        }

        let user = self.registrations.register(&registration).await?;
        let token = self
            .tokens
            .fetch_or_create(user.id, &generate_token_key())
            .await?;
        Ok(RegisterOutput { token, user })
    }
}

// ── RegisterTherapist ────────────────────────────────────────────────────────

pub struct RegisterTherapistInput {
    pub register: RegisterInput,
    pub invite_code: String,
}

pub struct RegisterTherapistUseCase<U, R, T>
where
    U: UserRepository,
    R: RegistrationPort,
    T: TokenRepository,
{
    pub users: U,
    pub registrations: R,
    pub tokens: T,
}

impl<U, R, T> RegisterTherapistUseCase<U, R, T>
where
    U: UserRepository,
    R: RegistrationPort,
    T: TokenRepository,
{
    /// The invite code is claimed inside the registration transaction, so two
    /// concurrent requests racing on one code cannot both succeed.
    pub async fn execute(&self, input: RegisterTherapistInput) -> Result<RegisterOutput, ApiError> {
        if input.invite_code.is_empty() {
            return Err(ApiError::InviteCodeInvalid);
        }
        let registration = prepare_registration(
            &input.register,
            AccountRole::Therapist,
            Some(input.invite_code),
        )?;
        if self
            .users
            .find_by_email(&registration.email)
            .await?
            .is_some()
        {
            return Err(ApiError::EmailTaken);
        }

        let user = self.registrations.register(&registration).await?;
        let token = self
            .tokens
            .fetch_or_create(user.id, &generate_token_key())
            .await?;
        Ok(RegisterOutput { token, user })
    }
}
