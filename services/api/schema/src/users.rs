use sea_orm::entity::prelude::*;

/// Account identity. `role` is the single stored role value (0 = client,
/// 1 = therapist, 2 = admin); `public_id` is the only identifier exposed
/// in public URLs.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub public_id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub role: i16,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::user_profiles::Entity")]
    UserProfile,
    #[sea_orm(has_one = "super::therapist_profiles::Entity")]
    TherapistProfile,
    #[sea_orm(has_one = "super::client_profiles::Entity")]
    ClientProfile,
    #[sea_orm(has_many = "super::therapist_photos::Entity")]
    TherapistPhotos,
    #[sea_orm(has_many = "super::publications::Entity")]
    Publications,
    #[sea_orm(has_one = "super::auth_tokens::Entity")]
    AuthToken,
}

impl Related<super::user_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserProfile.def()
    }
}

impl Related<super::therapist_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TherapistProfile.def()
    }
}

impl Related<super::client_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClientProfile.def()
    }
}

impl Related<super::therapist_photos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TherapistPhotos.def()
    }
}

impl Related<super::publications::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Publications.def()
    }
}

impl Related<super::auth_tokens::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuthToken.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
