use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EveCorporationSetting::Table)
                    .if_not_exists()
                    .col(pk_auto(EveCorporationSetting::Id))
                    .col(big_integer_uniq(EveCorporationSetting::CorporationId))
                    .col(boolean(EveCorporationSetting::Enabled))
                    .col(timestamp(EveCorporationSetting::CreatedAt))
                    .col(timestamp(EveCorporationSetting::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EveCorporationSetting::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EveCorporationSetting {
    Table,
    Id,
    CorporationId,
    Enabled,
    CreatedAt,
    UpdatedAt,
}
