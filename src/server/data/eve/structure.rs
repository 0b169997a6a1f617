use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

/// Read access to cached player-owned structures
///
/// Structures are only read here, rows are created outside of the cache service.
pub struct StructureRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StructureRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_structure_id(
        &self,
        structure_id: i64,
    ) -> Result<Option<entity::eve_structure::Model>, DbErr> {
        entity::prelude::EveStructure::find()
            .filter(entity::eve_structure::Column::StructureId.eq(structure_id))
            .one(self.db)
            .await
    }
}
