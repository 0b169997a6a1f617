use sea_orm::{ConnectionTrait, DbErr, EntityTrait};

/// Read-only access to NPC stations of the static data export
///
/// The `sde_station` table is populated by an external import, nothing here writes to it.
pub struct StationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_station_id(
        &self,
        station_id: i64,
    ) -> Result<Option<entity::sde_station::Model>, DbErr> {
        entity::prelude::SdeStation::find_by_id(station_id)
            .one(self.db)
            .await
    }
}
