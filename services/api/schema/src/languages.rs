use sea_orm::entity::prelude::*;

/// Language reference table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "languages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::therapist_languages::Entity")]
    TherapistLanguages,
}

impl Related<super::therapist_languages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TherapistLanguages.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
