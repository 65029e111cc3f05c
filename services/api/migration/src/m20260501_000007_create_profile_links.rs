use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TherapistSkills::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(TherapistSkills::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(TherapistSkills::SkillId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(TherapistSkills::UserId)
                            .col(TherapistSkills::SkillId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TherapistSkills::Table, TherapistSkills::UserId)
                            .to(TherapistProfiles::Table, TherapistProfiles::UserId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TherapistSkills::Table, TherapistSkills::SkillId)
                            .to(Skills::Table, Skills::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TherapistLanguages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TherapistLanguages::UserId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TherapistLanguages::LanguageId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(TherapistLanguages::UserId)
                            .col(TherapistLanguages::LanguageId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TherapistLanguages::Table, TherapistLanguages::UserId)
                            .to(TherapistProfiles::Table, TherapistProfiles::UserId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TherapistLanguages::Table, TherapistLanguages::LanguageId)
                            .to(Languages::Table, Languages::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ClientInterests::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ClientInterests::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(ClientInterests::SkillId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(ClientInterests::UserId)
                            .col(ClientInterests::SkillId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClientInterests::Table, ClientInterests::UserId)
                            .to(ClientProfiles::Table, ClientProfiles::UserId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClientInterests::Table, ClientInterests::SkillId)
                            .to(Skills::Table, Skills::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ClientInterests::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TherapistLanguages::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TherapistSkills::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum TherapistSkills {
    Table,
    UserId,
    SkillId,
}

#[derive(Iden)]
enum TherapistLanguages {
    Table,
    UserId,
    LanguageId,
}

#[derive(Iden)]
enum ClientInterests {
    Table,
    UserId,
    SkillId,
}

#[derive(Iden)]
enum TherapistProfiles {
    Table,
    UserId,
}

#[derive(Iden)]
enum ClientProfiles {
    Table,
    UserId,
}

#[derive(Iden)]
enum Skills {
    Table,
    Id,
}

#[derive(Iden)]
enum Languages {
    Table,
    Id,
}
