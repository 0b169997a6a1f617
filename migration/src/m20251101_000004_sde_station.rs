use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SdeStation::Table)
                    .if_not_exists()
                    .col(big_integer(SdeStation::StationId).primary_key())
                    .col(string(SdeStation::Name))
                    .col(big_integer_null(SdeStation::SolarSystemId))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SdeStation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SdeStation {
    Table,
    StationId,
    Name,
    SolarSystemId,
}
