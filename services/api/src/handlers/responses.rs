//! JSON response bodies shared across handlers.
//!
//! `is_client` / `is_therapist` are derived from the stored role here, at the
//! serialization boundary; nothing below this layer carries the booleans.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use mindora_domain::role::{AccountRole, Gender, TherapistStatus};

use crate::domain::types::{
    Account, InviteCode, Language, Publication, RoleProfile, Skill, TherapistListing,
    TherapistPhoto, TherapistProfile, User,
};

#[derive(Serialize)]
pub struct UserBody {
    pub public_id: Uuid,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub is_client: bool,
    pub is_therapist: bool,
    #[serde(serialize_with = "mindora_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserBody {
    fn from(user: &User) -> Self {
        Self {
            public_id: user.public_id,
            email: user.email.clone(),
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            is_client: user.role.is_client(),
            is_therapist: user.role.is_therapist(),
            created_at: user.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct SkillBody {
    pub id: i32,
    pub name: String,
}

impl From<&Skill> for SkillBody {
    fn from(skill: &Skill) -> Self {
        Self {
            id: skill.id,
            name: skill.name.clone(),
        }
    }
}

#[derive(Serialize)]
pub struct LanguageBody {
    pub id: i32,
    pub name: String,
}

impl From<&Language> for LanguageBody {
    fn from(language: &Language) -> Self {
        Self {
            id: language.id,
            name: language.name.clone(),
        }
    }
}

#[derive(Serialize)]
pub struct TherapistBody {
    pub bio: String,
    pub experience_years: i32,
    pub status: TherapistStatus,
    pub is_verified: bool,
    pub is_subscribed: bool,
    /// Absent when the therapist has not opted in via `display_hours`
    /// (owner views are exempt from the redaction).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_hours_worked: Option<i32>,
    pub display_hours: bool,
    pub skills: Vec<SkillBody>,
    pub languages: Vec<LanguageBody>,
}

impl TherapistBody {
    fn new(profile: &TherapistProfile, redact_hours: bool) -> Self {
        Self {
            bio: profile.bio.clone(),
            experience_years: profile.experience_years,
            status: profile.status,
            is_verified: profile.is_verified,
            is_subscribed: profile.is_subscribed,
            total_hours_worked: if redact_hours {
                profile.public_hours()
            } else {
                Some(profile.total_hours_worked)
            },
            display_hours: profile.display_hours,
            skills: profile.skills.iter().map(SkillBody::from).collect(),
            languages: profile.languages.iter().map(LanguageBody::from).collect(),
        }
    }
}

#[derive(Serialize)]
pub struct ClientBody {
    pub request_text: String,
    pub interests: Vec<SkillBody>,
}

#[derive(Serialize)]
pub struct ProfileBody {
    pub role: AccountRole,
    pub gender: Option<Gender>,
    pub avatar_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub therapist: Option<TherapistBody>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<ClientBody>,
}

/// Full account aggregate: identity fields plus the `profile` object.
#[derive(Serialize)]
pub struct AccountBody {
    #[serde(flatten)]
    pub user: UserBody,
    pub profile: ProfileBody,
}

impl AccountBody {
    /// `redact_hours` applies the display-time hours redaction; pass `false`
    /// only for the owner's own view.
    pub fn new(account: &Account, redact_hours: bool) -> Self {
        let (therapist, client) = match &account.role_profile {
            RoleProfile::Therapist(profile) => {
                (Some(TherapistBody::new(profile, redact_hours)), None)
            }
            RoleProfile::Client(profile) => (
                None,
                Some(ClientBody {
                    request_text: profile.request_text.clone(),
                    interests: profile.interests.iter().map(SkillBody::from).collect(),
                }),
            ),
            RoleProfile::Admin => (None, None),
        };
        Self {
            user: UserBody::from(&account.user),
            profile: ProfileBody {
                role: account.user.role,
                gender: account.base.gender,
                avatar_url: account.base.avatar_url().to_owned(),
                therapist,
                client,
            },
        }
    }
}

/// Directory summary row. Always publicly served, so the hours redaction is
/// unconditional.
#[derive(Serialize)]
pub struct ListingBody {
    pub id: Uuid,
    pub public_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub avatar_url: String,
    pub bio: String,
    pub experience_years: i32,
    pub status: TherapistStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_hours_worked: Option<i32>,
    pub skills: Vec<SkillBody>,
    pub languages: Vec<LanguageBody>,
    #[serde(serialize_with = "mindora_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
}

impl From<&TherapistListing> for ListingBody {
    fn from(listing: &TherapistListing) -> Self {
        Self {
            id: listing.user.id,
            public_id: listing.user.public_id,
            first_name: listing.user.first_name.clone(),
            last_name: listing.user.last_name.clone(),
            avatar_url: listing.base.avatar_url().to_owned(),
            bio: listing.profile.bio.clone(),
            experience_years: listing.profile.experience_years,
            status: listing.profile.status,
            total_hours_worked: listing.profile.public_hours(),
            skills: listing.profile.skills.iter().map(SkillBody::from).collect(),
            languages: listing
                .profile
                .languages
                .iter()
                .map(LanguageBody::from)
                .collect(),
            created_at: listing.profile.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct PhotoBody {
    pub id: Uuid,
    pub image_url: String,
    pub caption: String,
    pub position: i32,
    #[serde(serialize_with = "mindora_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
}

impl From<&TherapistPhoto> for PhotoBody {
    fn from(photo: &TherapistPhoto) -> Self {
        Self {
            id: photo.id,
            image_url: photo.image_path.clone(),
            caption: photo.caption.clone(),
            position: photo.position,
            created_at: photo.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct PublicationBody {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    #[serde(serialize_with = "mindora_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "mindora_core::serde::to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
}

impl From<&Publication> for PublicationBody {
    fn from(publication: &Publication) -> Self {
        Self {
            id: publication.id,
            title: publication.title.clone(),
            body: publication.body.clone(),
            created_at: publication.created_at,
            updated_at: publication.updated_at,
        }
    }
}

#[derive(Serialize)]
pub struct InviteBody {
    pub id: Uuid,
    pub code: String,
    pub is_used: bool,
    pub created_by: Option<Uuid>,
    pub used_by: Option<Uuid>,
    #[serde(serialize_with = "mindora_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    pub used_at: Option<DateTime<Utc>>,
}

impl From<&InviteCode> for InviteBody {
    fn from(invite: &InviteCode) -> Self {
        Self {
            id: invite.id,
            code: invite.code.clone(),
            is_used: invite.is_used,
            created_by: invite.created_by,
            used_by: invite.used_by,
            created_at: invite.created_at,
            used_at: invite.used_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn account(role_profile: RoleProfile, role: AccountRole) -> Account {
        let now = Utc::now();
        let user_id = Uuid::now_v7();
        Account {
            user: User {
                id: user_id,
                public_id: Uuid::new_v4(),
                email: "a@x.com".to_owned(),
                username: "a@x.com".to_owned(),
                first_name: "A".to_owned(),
                last_name: "B".to_owned(),
                role,
                created_at: now,
                updated_at: now,
            },
            base: crate::domain::types::BaseProfile {
                user_id,
                gender: None,
                avatar_path: None,
                created_at: now,
                updated_at: now,
            },
            role_profile,
        }
    }

    fn therapist_profile(display_hours: bool) -> TherapistProfile {
        let now = Utc::now();
        TherapistProfile {
            user_id: Uuid::now_v7(),
            bio: String::new(),
            experience_years: 1,
            status: TherapistStatus::Active,
            is_verified: true,
            is_subscribed: true,
            total_hours_worked: 450,
            display_hours,
            skills: vec![],
            languages: vec![],
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn should_derive_role_flags_in_client_body() {
        let account = account(
            RoleProfile::Client(crate::domain::types::ClientProfile {
                user_id: Uuid::now_v7(),
                request_text: "help".to_owned(),
                interests: vec![],
                created_at: Utc::now(),
                updated_at: Utc::now(),
            }),
            AccountRole::Client,
        );
        let json = serde_json::to_value(AccountBody::new(&account, true)).unwrap();
        assert_eq!(json["is_client"], true);
        assert_eq!(json["is_therapist"], false);
        assert_eq!(json["profile"]["role"], "CLIENT");
        assert_eq!(json["profile"]["client"]["request_text"], "help");
        assert!(json["profile"].get("therapist").is_none());
    }

    #[test]
    fn should_redact_hours_in_public_view_only() {
        let account = account(
            RoleProfile::Therapist(therapist_profile(false)),
            AccountRole::Therapist,
        );
        let public = serde_json::to_value(AccountBody::new(&account, true)).unwrap();
        assert!(public["profile"]["therapist"].get("total_hours_worked").is_none());

        let own = serde_json::to_value(AccountBody::new(&account, false)).unwrap();
        assert_eq!(own["profile"]["therapist"]["total_hours_worked"], 450);
    }

    #[test]
    fn should_show_hours_publicly_when_opted_in() {
        let account = account(
            RoleProfile::Therapist(therapist_profile(true)),
            AccountRole::Therapist,
        );
        let public = serde_json::to_value(AccountBody::new(&account, true)).unwrap();
        assert_eq!(public["profile"]["therapist"]["total_hours_worked"], 450);
    }

    #[test]
    fn should_fall_back_to_default_avatar_url() {
        let account = account(RoleProfile::Admin, AccountRole::Admin);
        let json = serde_json::to_value(AccountBody::new(&account, true)).unwrap();
        assert_eq!(
            json["profile"]["avatar_url"],
            crate::domain::types::DEFAULT_AVATAR_URL
        );
    }
}
