use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EveCharacterCredential::Table)
                    .if_not_exists()
                    .col(pk_auto(EveCharacterCredential::Id))
                    .col(big_integer_uniq(EveCharacterCredential::CharacterId))
                    .col(string(EveCharacterCredential::Name))
                    .col(big_integer_null(EveCharacterCredential::CorporationId))
                    .col(text(EveCharacterCredential::AccessToken))
                    .col(boolean(EveCharacterCredential::Valid))
                    .col(timestamp_null(EveCharacterCredential::ExpiresAt))
                    .col(timestamp_null(EveCharacterCredential::LastLoginAt))
                    .col(timestamp(EveCharacterCredential::CreatedAt))
                    .col(timestamp(EveCharacterCredential::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(EveCharacterCredential::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub enum EveCharacterCredential {
    Table,
    Id,
    CharacterId,
    Name,
    CorporationId,
    AccessToken,
    Valid,
    ExpiresAt,
    LastLoginAt,
    CreatedAt,
    UpdatedAt,
}
