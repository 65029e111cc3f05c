#![allow(async_fn_in_trait)]

use uuid::Uuid;

use mindora_domain::pagination::PageRequest;

use crate::domain::types::{
    Account, DirectoryFilter, InviteCode, Language, NewRegistration, Publication, Skill,
    TherapistListing, TherapistPhoto, User,
};
use crate::error::ApiError;

/// Read-only lookups over account identities.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError>;
    async fn find_by_public_id(&self, public_id: Uuid) -> Result<Option<User>, ApiError>;

    /// Password hash for login verification, keyed by email.
    async fn password_hash_by_email(&self, email: &str) -> Result<Option<String>, ApiError>;
}

/// The registration transaction: identity + base profile + role profile, and
/// on the therapist path the invite-code claim, committed as one unit.
pub trait RegistrationPort: Send + Sync {
    /// All-or-nothing. Fails with `InviteCodeInvalid` when the conditional
    /// claim touches zero rows, and with `EmailTaken` on a unique-email
    /// violation; either failure leaves nothing persisted.
    async fn register(&self, registration: &NewRegistration) -> Result<User, ApiError>;
}

/// Opaque bearer tokens, one live token per user.
pub trait TokenRepository: Send + Sync {
    /// Return the user's existing token, or persist `candidate` and return it.
    async fn fetch_or_create(&self, user_id: Uuid, candidate: &str) -> Result<String, ApiError>;

    /// Resolve a presented token to its user. `None` for unknown keys.
    async fn find_user_id(&self, key: &str) -> Result<Option<Uuid>, ApiError>;

    /// Delete the user's token. Returns `true` if one existed.
    async fn revoke(&self, user_id: Uuid) -> Result<bool, ApiError>;
}

/// Admin-side invite-code management. Consumption lives in
/// [`RegistrationPort`], not here.
pub trait InviteCodeRepository: Send + Sync {
    async fn create(&self, invite: &InviteCode) -> Result<(), ApiError>;
    async fn list(&self, page: PageRequest) -> Result<Vec<InviteCode>, ApiError>;
}

/// Public directory reads. Every query is gated on
/// `is_verified AND is_subscribed`.
pub trait DirectoryRepository: Send + Sync {
    async fn list_visible(
        &self,
        filter: DirectoryFilter,
        page: PageRequest,
    ) -> Result<Vec<TherapistListing>, ApiError>;

    async fn get_visible(&self, user_id: Uuid) -> Result<Option<TherapistListing>, ApiError>;
}

/// Owner-scoped profile reads and writes. Update methods address rows by the
/// caller's user id only and can never touch `role`, `is_verified`, or
/// `is_subscribed`.
pub trait ProfileRepository: Send + Sync {
    async fn load_account(&self, user_id: Uuid) -> Result<Option<Account>, ApiError>;

    async fn update_base(
        &self,
        user_id: Uuid,
        first_name: Option<&str>,
        last_name: Option<&str>,
        gender: Option<mindora_domain::role::Gender>,
    ) -> Result<(), ApiError>;

    /// Replace the avatar reference. The old file is the media store's
    /// garbage-collection problem, not the database's.
    async fn update_avatar(&self, user_id: Uuid, avatar_path: &str) -> Result<(), ApiError>;

    async fn update_therapist(
        &self,
        user_id: Uuid,
        fields: TherapistProfileUpdate<'_>,
    ) -> Result<bool, ApiError>;

    async fn update_client(
        &self,
        user_id: Uuid,
        fields: ClientProfileUpdate<'_>,
    ) -> Result<bool, ApiError>;
}

/// Partial update for the therapist profile row; `None` leaves a field alone.
#[derive(Debug, Default)]
pub struct TherapistProfileUpdate<'a> {
    pub bio: Option<&'a str>,
    pub experience_years: Option<i32>,
    pub status: Option<mindora_domain::role::TherapistStatus>,
    pub display_hours: Option<bool>,
    pub skill_ids: Option<&'a [i32]>,
    pub language_ids: Option<&'a [i32]>,
}

/// Partial update for the client profile row.
#[derive(Debug, Default)]
pub struct ClientProfileUpdate<'a> {
    pub request_text: Option<&'a str>,
    pub interest_ids: Option<&'a [i32]>,
}

/// Therapist gallery photos.
pub trait PhotoRepository: Send + Sync {
    async fn list_by_therapist(&self, therapist_id: Uuid)
    -> Result<Vec<TherapistPhoto>, ApiError>;

    async fn create(&self, photo: &TherapistPhoto) -> Result<(), ApiError>;

    /// Owner-scoped partial update. Returns `false` when no row matched the
    /// (id, owner) pair.
    async fn update(
        &self,
        id: Uuid,
        therapist_id: Uuid,
        caption: Option<&str>,
        position: Option<i32>,
    ) -> Result<bool, ApiError>;

    /// Owner-scoped delete. Returns `false` when no row matched.
    async fn delete(&self, id: Uuid, therapist_id: Uuid) -> Result<bool, ApiError>;
}

/// Authored publications.
pub trait PublicationRepository: Send + Sync {
    async fn list_by_author(
        &self,
        author_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Publication>, ApiError>;

    async fn create(&self, publication: &Publication) -> Result<(), ApiError>;

    async fn update(
        &self,
        id: Uuid,
        author_id: Uuid,
        title: Option<&str>,
        body: Option<&str>,
    ) -> Result<bool, ApiError>;

    async fn delete(&self, id: Uuid, author_id: Uuid) -> Result<bool, ApiError>;
}

/// Skill and language lookup tables.
pub trait ReferenceRepository: Send + Sync {
    async fn list_skills(&self) -> Result<Vec<Skill>, ApiError>;
    async fn list_languages(&self) -> Result<Vec<Language>, ApiError>;

    /// True iff every id names an existing skill.
    async fn skills_exist(&self, ids: &[i32]) -> Result<bool, ApiError>;

    /// True iff every id names an existing language.
    async fn languages_exist(&self, ids: &[i32]) -> Result<bool, ApiError>;
}

/// Pluggable media storage. Returns a URL path the HTTP layer can serve.
pub trait MediaStore: Send + Sync {
    async fn store(
        &self,
        category: &str,
        original_filename: &str,
        bytes: &[u8],
    ) -> Result<String, ApiError>;
}
