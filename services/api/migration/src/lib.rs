use sea_orm_migration::prelude::*;

mod m20260501_000001_create_users;
mod m20260501_000002_create_user_profiles;
mod m20260501_000003_create_skills;
mod m20260501_000004_create_languages;
mod m20260501_000005_create_therapist_profiles;
mod m20260501_000006_create_client_profiles;
mod m20260501_000007_create_profile_links;
mod m20260501_000008_create_invite_codes;
mod m20260501_000009_create_therapist_photos;
mod m20260501_000010_create_publications;
mod m20260501_000011_create_auth_tokens;
mod m20260501_000012_add_directory_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260501_000001_create_users::Migration),
            Box::new(m20260501_000002_create_user_profiles::Migration),
            Box::new(m20260501_000003_create_skills::Migration),
            Box::new(m20260501_000004_create_languages::Migration),
            Box::new(m20260501_000005_create_therapist_profiles::Migration),
            Box::new(m20260501_000006_create_client_profiles::Migration),
            Box::new(m20260501_000007_create_profile_links::Migration),
            Box::new(m20260501_000008_create_invite_codes::Migration),
            Box::new(m20260501_000009_create_therapist_photos::Migration),
            Box::new(m20260501_000010_create_publications::Migration),
            Box::new(m20260501_000011_create_auth_tokens::Migration),
            Box::new(m20260501_000012_add_directory_indexes::Migration),
        ]
    }
}
