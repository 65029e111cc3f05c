//! sea-orm entity definitions for the Mindora API database.

pub mod auth_tokens;
pub mod client_interests;
pub mod client_profiles;
pub mod invite_codes;
pub mod languages;
pub mod publications;
pub mod skills;
pub mod therapist_languages;
pub mod therapist_photos;
pub mod therapist_profiles;
pub mod therapist_skills;
pub mod user_profiles;
pub mod users;
