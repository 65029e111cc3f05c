use sea_orm::entity::prelude::*;

/// Therapist profile, one-to-one with `users`. `is_verified` and
/// `is_subscribed` must both be true for the row to appear in the public
/// directory; `status` is display-only. `total_hours_worked` is served
/// externally only when `display_hours` is set.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "therapist_profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub bio: String,
    pub experience_years: i32,
    pub status: i16,
    pub is_verified: bool,
    pub is_subscribed: bool,
    pub total_hours_worked: i32,
    pub display_hours: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::therapist_skills::Entity")]
    TherapistSkills,
    #[sea_orm(has_many = "super::therapist_languages::Entity")]
    TherapistLanguages,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::therapist_skills::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TherapistSkills.def()
    }
}

impl Related<super::therapist_languages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TherapistLanguages.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
