use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EveStructure::Table)
                    .if_not_exists()
                    .col(pk_auto(EveStructure::Id))
                    .col(big_integer_uniq(EveStructure::StructureId))
                    .col(string(EveStructure::Name))
                    .col(big_integer_null(EveStructure::TypeId))
                    .col(big_integer_null(EveStructure::SolarSystemId))
                    .col(big_integer_null(EveStructure::OwnerId))
                    .col(timestamp(EveStructure::CreatedAt))
                    .col(timestamp(EveStructure::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EveStructure::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EveStructure {
    Table,
    Id,
    StructureId,
    Name,
    TypeId,
    SolarSystemId,
    OwnerId,
    CreatedAt,
    UpdatedAt,
}
