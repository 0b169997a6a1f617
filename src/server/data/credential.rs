use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

pub struct CredentialRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CredentialRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_character_id(
        &self,
        character_id: i64,
    ) -> Result<Option<entity::eve_character_credential::Model>, DbErr> {
        entity::prelude::EveCharacterCredential::find()
            .filter(entity::eve_character_credential::Column::CharacterId.eq(character_id))
            .one(self.db)
            .await
    }
}
