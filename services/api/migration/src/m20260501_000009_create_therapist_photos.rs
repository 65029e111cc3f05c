use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TherapistPhotos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TherapistPhotos::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TherapistPhotos::TherapistId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TherapistPhotos::ImagePath)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TherapistPhotos::Caption)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(TherapistPhotos::Position)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(TherapistPhotos::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TherapistPhotos::Table, TherapistPhotos::TherapistId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TherapistPhotos::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum TherapistPhotos {
    Table,
    Id,
    TherapistId,
    ImagePath,
    Caption,
    Position,
    CreatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
