pub use sea_orm_migration::prelude::*;

mod m20251101_000001_eve_corporation;
mod m20251101_000002_eve_corporation_member_tracking;
mod m20251101_000003_eve_structure;
mod m20251101_000004_sde_station;
mod m20251101_000005_eve_corporation_setting;
mod m20251101_000006_eve_character_credential;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_eve_corporation::Migration),
            Box::new(m20251101_000002_eve_corporation_member_tracking::Migration),
            Box::new(m20251101_000003_eve_structure::Migration),
            Box::new(m20251101_000004_sde_station::Migration),
            Box::new(m20251101_000005_eve_corporation_setting::Migration),
            Box::new(m20251101_000006_eve_character_credential::Migration),
        ]
    }
}
