use sea_orm_migration::{
    prelude::*,
    schema::*,
    sea_orm::{ConnectionTrait, DatabaseBackend},
};

static IDX_EVE_CORPORATION_CORPORATION_ID: &str = "idx-eve_corporation-corporation_id";
static IDX_EVE_CORPORATION_MEMBER_COUNT: &str = "idx-eve_corporation-member_count";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EveCorporation::Table)
                    .if_not_exists()
                    .col(pk_auto(EveCorporation::Id))
                    .col(big_integer(EveCorporation::CorporationId))
                    .col(string(EveCorporation::Name))
                    .col(string(EveCorporation::Ticker))
                    .col(text_null(EveCorporation::Description))
                    .col(big_integer_null(EveCorporation::AllianceId))
                    .col(big_integer_null(EveCorporation::FactionId))
                    .col(big_integer_null(EveCorporation::CeoId))
                    .col(big_integer_null(EveCorporation::CreatorId))
                    .col(timestamp_null(EveCorporation::DateFounded))
                    .col(big_integer(EveCorporation::MemberCount))
                    .col(big_integer_null(EveCorporation::Shares))
                    .col(double(EveCorporation::TaxRate))
                    .col(big_integer_null(EveCorporation::HomeStationId))
                    .col(string_null(EveCorporation::Url))
                    .col(boolean_null(EveCorporation::WarEligible))
                    .col(timestamp(EveCorporation::CreatedAt))
                    .col(timestamp(EveCorporation::UpdatedAt))
                    .col(timestamp_null(EveCorporation::DeletedAt))
                    .to_owned(),
            )
            .await?;

        // Not unique: re-upserting a soft-deleted corporation creates a second live row
        manager
            .create_index(
                Index::create()
                    .name(IDX_EVE_CORPORATION_CORPORATION_ID)
                    .table(EveCorporation::Table)
                    .col(EveCorporation::CorporationId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EVE_CORPORATION_MEMBER_COUNT)
                    .table(EveCorporation::Table)
                    .col(EveCorporation::MemberCount)
                    .to_owned(),
            )
            .await?;

        if manager.get_database_backend() == DatabaseBackend::Postgres {
            manager
                .get_connection()
                .execute_unprepared(
                    "CREATE INDEX IF NOT EXISTS \"idx-eve_corporation-search\" ON eve_corporation \
                     USING GIN (to_tsvector('simple', name || ' ' || ticker))",
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EVE_CORPORATION_MEMBER_COUNT)
                    .table(EveCorporation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EVE_CORPORATION_CORPORATION_ID)
                    .table(EveCorporation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(EveCorporation::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum EveCorporation {
    Table,
    Id,
    CorporationId,
    Name,
    Ticker,
    Description,
    AllianceId,
    FactionId,
    CeoId,
    CreatorId,
    DateFounded,
    MemberCount,
    Shares,
    TaxRate,
    HomeStationId,
    Url,
    WarEligible,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
