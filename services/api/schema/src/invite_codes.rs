use sea_orm::entity::prelude::*;

/// Single-use token gating therapist self-registration.
/// `is_used` flips false→true exactly once, atomically with the account the
/// code authorizes. `created_by` is nullable so codes survive creator deletion.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "invite_codes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub code: String,
    pub is_used: bool,
    pub created_by: Option<Uuid>,
    pub used_by: Option<Uuid>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub used_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::CreatedBy",
        to = "super::users::Column::Id"
    )]
    Creator,
}

impl ActiveModelBehavior for ActiveModel {}
