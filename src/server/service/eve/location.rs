use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::eve::{station::StationRepository, structure::StructureRepository},
    util::eve::is_npc_station_id,
};

/// Resolves location IDs to names.
///
/// NPC stations are looked up in the static dataset, every other ID in the structure cache.
/// Results, including misses, are memoized for the lifetime of the resolver so one member
/// tracking ingestion resolves each location once.
pub struct LocationResolver<'a> {
    db: &'a DatabaseConnection,
    resolved: HashMap<i64, Option<String>>,
}

impl<'a> LocationResolver<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            resolved: HashMap::new(),
        }
    }

    /// Returns the name of a location, `None` when it is unknown.
    ///
    /// Lookup failures are logged and resolve to `None`.
    pub async fn resolve(&mut self, location_id: i64) -> Option<String> {
        if let Some(name) = self.resolved.get(&location_id) {
            return name.clone();
        }

        let name = if is_npc_station_id(location_id) {
            self.resolve_station(location_id).await
        } else {
            self.resolve_structure(location_id).await
        };

        self.resolved.insert(location_id, name.clone());

        name
    }

    async fn resolve_station(&self, station_id: i64) -> Option<String> {
        match StationRepository::new(self.db)
            .get_by_station_id(station_id)
            .await
        {
            Ok(Some(station)) => Some(station.name),
            Ok(None) => {
                tracing::debug!(station_id = %station_id, "Station missing from static dataset");
                None
            }
            Err(e) => {
                tracing::warn!(station_id = %station_id, error = %e, "Failed to look up station");
                None
            }
        }
    }

    async fn resolve_structure(&self, structure_id: i64) -> Option<String> {
        match StructureRepository::new(self.db)
            .get_by_structure_id(structure_id)
            .await
        {
            Ok(Some(structure)) => Some(structure.name),
            Ok(None) => {
                tracing::debug!(structure_id = %structure_id, "Unknown structure");
                None
            }
            Err(e) => {
                tracing::warn!(
                    structure_id = %structure_id,
                    error = %e,
                    "Failed to look up structure"
                );
                None
            }
        }
    }
}
