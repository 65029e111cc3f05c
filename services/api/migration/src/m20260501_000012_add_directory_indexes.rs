use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Directory listing filters on both gates and orders by recency.
        manager
            .create_index(
                Index::create()
                    .table(TherapistProfiles::Table)
                    .col(TherapistProfiles::IsVerified)
                    .col(TherapistProfiles::IsSubscribed)
                    .col(TherapistProfiles::CreatedAt)
                    .name("idx_therapist_profiles_visibility")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(TherapistPhotos::Table)
                    .col(TherapistPhotos::TherapistId)
                    .name("idx_therapist_photos_therapist_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Publications::Table)
                    .col(Publications::AuthorId)
                    .name("idx_publications_author_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_publications_author_id").to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_therapist_photos_therapist_id")
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_therapist_profiles_visibility")
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum TherapistProfiles {
    Table,
    IsVerified,
    IsSubscribed,
    CreatedAt,
}

#[derive(Iden)]
enum TherapistPhotos {
    Table,
    TherapistId,
}

#[derive(Iden)]
enum Publications {
    Table,
    AuthorId,
}
