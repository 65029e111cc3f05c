//! Account role and related profile enums.

use serde::{Deserialize, Serialize};

/// The single stored source of truth for what kind of account a user has.
///
/// Wire format: SCREAMING_SNAKE_CASE strings (`"CLIENT"`, `"THERAPIST"`,
/// `"ADMIN"`); column format: `i16` (0 = Client, 1 = Therapist, 2 = Admin).
/// The legacy `is_client` / `is_therapist` booleans are derived views over
/// this value and are never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountRole {
    Client = 0,
    Therapist = 1,
    Admin = 2,
}

impl AccountRole {
    /// Convert from the `i16` column value. Returns `None` for unknown values.
    pub fn from_i16(v: i16) -> Option<Self> {
        match v {
            0 => Some(Self::Client),
            1 => Some(Self::Therapist),
            2 => Some(Self::Admin),
            _ => None,
        }
    }

    /// Convert to the `i16` column value.
    pub fn as_i16(self) -> i16 {
        self as i16
    }

    /// Derived view: does this account register as a client?
    pub fn is_client(self) -> bool {
        matches!(self, Self::Client)
    }

    /// Derived view: does this account register as a therapist?
    pub fn is_therapist(self) -> bool {
        matches!(self, Self::Therapist)
    }
}

/// Optional self-reported gender on the base profile.
///
/// Wire format: snake_case strings; column format: `i16`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Female = 0,
    Male = 1,
    Other = 2,
}

impl Gender {
    pub fn from_i16(v: i16) -> Option<Self> {
        match v {
            0 => Some(Self::Female),
            1 => Some(Self::Male),
            2 => Some(Self::Other),
            _ => None,
        }
    }

    pub fn as_i16(self) -> i16 {
        self as i16
    }
}

/// Display-only therapist availability status.
///
/// Not a visibility gate — directory visibility is `is_verified` plus
/// `is_subscribed` only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TherapistStatus {
    Active = 0,
    OnBreak = 1,
    Archived = 2,
}

impl TherapistStatus {
    pub fn from_i16(v: i16) -> Option<Self> {
        match v {
            0 => Some(Self::Active),
            1 => Some(Self::OnBreak),
            2 => Some(Self::Archived),
            _ => None,
        }
    }

    pub fn as_i16(self) -> i16 {
        self as i16
    }
}

impl Default for TherapistStatus {
    fn default() -> Self {
        Self::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_i16_to_account_role() {
        assert_eq!(AccountRole::from_i16(0), Some(AccountRole::Client));
        assert_eq!(AccountRole::from_i16(1), Some(AccountRole::Therapist));
        assert_eq!(AccountRole::from_i16(2), Some(AccountRole::Admin));
        assert_eq!(AccountRole::from_i16(3), None);
    }

    #[test]
    fn should_round_trip_account_role_column_value() {
        for role in [
            AccountRole::Client,
            AccountRole::Therapist,
            AccountRole::Admin,
        ] {
            assert_eq!(AccountRole::from_i16(role.as_i16()), Some(role));
        }
    }

    #[test]
    fn should_derive_flags_from_single_role() {
        assert!(AccountRole::Client.is_client());
        assert!(!AccountRole::Client.is_therapist());
        assert!(AccountRole::Therapist.is_therapist());
        assert!(!AccountRole::Therapist.is_client());
        assert!(!AccountRole::Admin.is_client());
        assert!(!AccountRole::Admin.is_therapist());
    }

    #[test]
    fn should_serialize_role_as_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&AccountRole::Client).unwrap(),
            "\"CLIENT\""
        );
        assert_eq!(
            serde_json::to_string(&AccountRole::Therapist).unwrap(),
            "\"THERAPIST\""
        );
    }

    #[test]
    fn should_serialize_gender_as_snake_case() {
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"female\"");
        assert_eq!(serde_json::to_string(&Gender::Other).unwrap(), "\"other\"");
    }

    #[test]
    fn should_default_therapist_status_to_active() {
        assert_eq!(TherapistStatus::default(), TherapistStatus::Active);
    }

    #[test]
    fn should_round_trip_status_column_value() {
        for status in [
            TherapistStatus::Active,
            TherapistStatus::OnBreak,
            TherapistStatus::Archived,
        ] {
            assert_eq!(TherapistStatus::from_i16(status.as_i16()), Some(status));
        }
        assert_eq!(TherapistStatus::from_i16(9), None);
    }
}
