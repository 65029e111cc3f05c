use sea_orm::entity::prelude::*;

/// Skill reference table. Doubles as the tag vocabulary for client interests.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "skills")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::therapist_skills::Entity")]
    TherapistSkills,
    #[sea_orm(has_many = "super::client_interests::Entity")]
    ClientInterests,
}

impl Related<super::therapist_skills::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TherapistSkills.def()
    }
}

impl Related<super::client_interests::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClientInterests.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
