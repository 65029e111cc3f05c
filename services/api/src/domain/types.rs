use chrono::{DateTime, Utc};
use uuid::Uuid;

use mindora_domain::role::{AccountRole, Gender, TherapistStatus};

/// URL served when a profile has no uploaded avatar.
pub const DEFAULT_AVATAR_URL: &str = "/media/defaults/avatar.png";

/// Account identity. `public_id` is the only identifier safe for public URLs;
/// `id` never leaves the service.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub public_id: Uuid,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub role: AccountRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Base profile fields shared by every account.
#[derive(Debug, Clone)]
pub struct BaseProfile {
    pub user_id: Uuid,
    pub gender: Option<Gender>,
    pub avatar_path: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BaseProfile {
    /// Avatar URL with the static default fallback applied.
    pub fn avatar_url(&self) -> &str {
        self.avatar_path.as_deref().unwrap_or(DEFAULT_AVATAR_URL)
    }
}

/// Therapist-specific profile. Directory visibility requires `is_verified`
/// and `is_subscribed` both true; `status` is informational only.
#[derive(Debug, Clone)]
pub struct TherapistProfile {
    pub user_id: Uuid,
    pub bio: String,
    pub experience_years: i32,
    pub status: TherapistStatus,
    pub is_verified: bool,
    pub is_subscribed: bool,
    pub total_hours_worked: i32,
    pub display_hours: bool,
    pub skills: Vec<Skill>,
    pub languages: Vec<Language>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TherapistProfile {
    /// Both gates required for any public listing.
    pub fn is_publicly_visible(&self) -> bool {
        self.is_verified && self.is_subscribed
    }

    /// Worked hours as served to anyone other than the owner.
    /// `None` unless the therapist opted in via `display_hours`.
    pub fn public_hours(&self) -> Option<i32> {
        self.display_hours.then_some(self.total_hours_worked)
    }
}

/// Client-specific profile. Interests reuse the skill vocabulary.
#[derive(Debug, Clone)]
pub struct ClientProfile {
    pub user_id: Uuid,
    pub request_text: String,
    pub interests: Vec<Skill>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Role-specific half of an account. Capability checks are pattern matches
/// on this enum, not nullable-field probing.
#[derive(Debug, Clone)]
pub enum RoleProfile {
    Client(ClientProfile),
    Therapist(TherapistProfile),
    Admin,
}

/// Full account aggregate: identity + base profile + role profile.
#[derive(Debug, Clone)]
pub struct Account {
    pub user: User,
    pub base: BaseProfile,
    pub role_profile: RoleProfile,
}

/// A therapist row as served by the public directory.
#[derive(Debug, Clone)]
pub struct TherapistListing {
    pub user: User,
    pub base: BaseProfile,
    pub profile: TherapistProfile,
}

#[derive(Debug, Clone)]
pub struct Skill {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct Language {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct InviteCode {
    pub id: Uuid,
    pub code: String,
    pub is_used: bool,
    pub created_by: Option<Uuid>,
    pub used_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub used_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct TherapistPhoto {
    pub id: Uuid,
    pub therapist_id: Uuid,
    pub image_path: String,
    pub caption: String,
    pub position: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Publication {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Everything the registration transaction writes, pre-validated and with the
/// password already hashed. `invite_code` is `Some` only on the therapist path.
#[derive(Debug, Clone)]
pub struct NewRegistration {
    pub user_id: Uuid,
    pub public_id: Uuid,
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub role: AccountRole,
    pub invite_code: Option<String>,
}

/// Optional skill/language filters for the public directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectoryFilter {
    pub skill_id: Option<i32>,
    pub language_id: Option<i32>,
}

/// Minimal well-formedness check for login emails: one `@` with a dotted
/// domain, no whitespace. Deliverability is not this service's problem.
pub fn validate_email(email: &str) -> bool {
    if email.len() > 254 || email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn test_therapist_profile() -> TherapistProfile {
        TherapistProfile {
            user_id: Uuid::now_v7(),
            bio: String::new(),
            experience_years: 0,
            status: TherapistStatus::Active,
            is_verified: false,
            is_subscribed: false,
            total_hours_worked: 120,
            display_hours: false,
            skills: vec![],
            languages: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn should_accept_plain_email() {
        assert!(validate_email("a@x.com"));
        assert!(validate_email("first.last@sub.example.org"));
    }

    #[test]
    fn should_reject_malformed_email() {
        assert!(!validate_email(""));
        assert!(!validate_email("no-at-sign"));
        assert!(!validate_email("@example.com"));
        assert!(!validate_email("user@"));
        assert!(!validate_email("user@nodot"));
        assert!(!validate_email("user@.com"));
        assert!(!validate_email("user name@example.com"));
        assert!(!validate_email("a@b@c.com"));
    }

    #[test]
    fn should_require_both_gates_for_visibility() {
        let mut profile = test_therapist_profile();
        assert!(!profile.is_publicly_visible());
        profile.is_verified = true;
        assert!(!profile.is_publicly_visible());
        profile.is_subscribed = true;
        assert!(profile.is_publicly_visible());
    }

    #[test]
    fn should_redact_hours_unless_opted_in() {
        let mut profile = test_therapist_profile();
        assert_eq!(profile.public_hours(), None);
        profile.display_hours = true;
        assert_eq!(profile.public_hours(), Some(120));
    }

    #[test]
    fn should_fall_back_to_default_avatar() {
        let mut base = BaseProfile {
            user_id: Uuid::now_v7(),
            gender: None,
            avatar_path: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(base.avatar_url(), DEFAULT_AVATAR_URL);
        base.avatar_path = Some("/media/avatars/abc.png".to_owned());
        assert_eq!(base.avatar_url(), "/media/avatars/abc.png");
    }
}
