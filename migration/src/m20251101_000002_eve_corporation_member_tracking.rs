use sea_orm_migration::{prelude::*, schema::*};

static IDX_MEMBER_TRACKING_CORPORATION_CHARACTER: &str =
    "idx-eve_corporation_member_tracking-corporation_id-character_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EveCorporationMemberTracking::Table)
                    .if_not_exists()
                    .col(pk_auto(EveCorporationMemberTracking::Id))
                    .col(big_integer(EveCorporationMemberTracking::CorporationId))
                    .col(big_integer(EveCorporationMemberTracking::CharacterId))
                    .col(big_integer_null(EveCorporationMemberTracking::BaseId))
                    .col(big_integer_null(EveCorporationMemberTracking::LocationId))
                    .col(timestamp_null(EveCorporationMemberTracking::LogonDate))
                    .col(timestamp_null(EveCorporationMemberTracking::LogoffDate))
                    .col(big_integer_null(EveCorporationMemberTracking::ShipTypeId))
                    .col(timestamp_null(EveCorporationMemberTracking::StartDate))
                    .col(timestamp(EveCorporationMemberTracking::CreatedAt))
                    .col(timestamp(EveCorporationMemberTracking::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MEMBER_TRACKING_CORPORATION_CHARACTER)
                    .table(EveCorporationMemberTracking::Table)
                    .col(EveCorporationMemberTracking::CorporationId)
                    .col(EveCorporationMemberTracking::CharacterId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MEMBER_TRACKING_CORPORATION_CHARACTER)
                    .table(EveCorporationMemberTracking::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(EveCorporationMemberTracking::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum EveCorporationMemberTracking {
    Table,
    Id,
    CorporationId,
    CharacterId,
    BaseId,
    LocationId,
    LogonDate,
    LogoffDate,
    ShipTypeId,
    StartDate,
    CreatedAt,
    UpdatedAt,
}
