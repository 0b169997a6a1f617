//! Database insertion utilities.
//!
//! Rows are inserted directly through the entities, bypassing the repositories under test.

use chrono::{Duration, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::TEST_ACCESS_TOKEN,
    error::TestError,
    fixtures::eve::{factory::MOCK_CEO_ID, EveFixtures},
};

impl<'a> EveFixtures<'a> {
    /// Insert a live mock corporation.
    ///
    /// # Arguments
    /// - `corporation_id` - The EVE Online corporation ID to insert
    /// - `ceo_id` - CEO character ID, `None` for a closed corporation
    pub async fn insert_mock_corporation(
        &self,
        corporation_id: i64,
        ceo_id: Option<i64>,
    ) -> Result<entity::eve_corporation::Model, TestError> {
        self.insert_corporation(corporation_id, "The Order of Autumn", "F4LL.", 21, ceo_id, false)
            .await
    }

    /// Insert a live corporation with the provided name, ticker and member count.
    pub async fn insert_named_corporation(
        &self,
        corporation_id: i64,
        name: &str,
        ticker: &str,
        member_count: i64,
    ) -> Result<entity::eve_corporation::Model, TestError> {
        self.insert_corporation(
            corporation_id,
            name,
            ticker,
            member_count,
            Some(MOCK_CEO_ID),
            false,
        )
        .await
    }

    /// Insert a soft-deleted corporation.
    pub async fn insert_deleted_corporation(
        &self,
        corporation_id: i64,
    ) -> Result<entity::eve_corporation::Model, TestError> {
        self.insert_corporation(
            corporation_id,
            "Deleted Corporation",
            "DEL",
            1,
            Some(MOCK_CEO_ID),
            true,
        )
        .await
    }

    async fn insert_corporation(
        &self,
        corporation_id: i64,
        name: &str,
        ticker: &str,
        member_count: i64,
        ceo_id: Option<i64>,
        deleted: bool,
    ) -> Result<entity::eve_corporation::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::EveCorporation::insert(entity::eve_corporation::ActiveModel {
                corporation_id: ActiveValue::Set(corporation_id),
                name: ActiveValue::Set(name.to_string()),
                ticker: ActiveValue::Set(ticker.to_string()),
                description: ActiveValue::Set(None),
                alliance_id: ActiveValue::Set(None),
                faction_id: ActiveValue::Set(None),
                ceo_id: ActiveValue::Set(ceo_id),
                creator_id: ActiveValue::Set(ceo_id),
                date_founded: ActiveValue::Set(None),
                member_count: ActiveValue::Set(member_count),
                shares: ActiveValue::Set(None),
                tax_rate: ActiveValue::Set(0.1),
                home_station_id: ActiveValue::Set(None),
                url: ActiveValue::Set(None),
                war_eligible: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                deleted_at: ActiveValue::Set(deleted.then_some(now)),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert the corporation setting deciding whether its CEO's credential is validated.
    pub async fn insert_corporation_setting(
        &self,
        corporation_id: i64,
        enabled: bool,
    ) -> Result<entity::eve_corporation_setting::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::EveCorporationSetting::insert(
                entity::eve_corporation_setting::ActiveModel {
                    corporation_id: ActiveValue::Set(corporation_id),
                    enabled: ActiveValue::Set(enabled),
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                    ..Default::default()
                },
            )
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a credential for a character.
    ///
    /// # Arguments
    /// - `character_id` - Character the credential belongs to
    /// - `corporation_id` - Corporation of the character
    /// - `valid` - Whether the credential is flagged valid
    pub async fn insert_mock_credential(
        &self,
        character_id: i64,
        corporation_id: Option<i64>,
        valid: bool,
    ) -> Result<entity::eve_character_credential::Model, TestError> {
        self.insert_credential(character_id, corporation_id, TEST_ACCESS_TOKEN, valid)
            .await
    }

    /// Insert a credential with the provided access token, e.g. an empty one.
    pub async fn insert_credential(
        &self,
        character_id: i64,
        corporation_id: Option<i64>,
        access_token: &str,
        valid: bool,
    ) -> Result<entity::eve_character_credential::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::EveCharacterCredential::insert(
                entity::eve_character_credential::ActiveModel {
                    character_id: ActiveValue::Set(character_id),
                    name: ActiveValue::Set(format!("Character {}", character_id)),
                    corporation_id: ActiveValue::Set(corporation_id),
                    access_token: ActiveValue::Set(access_token.to_string()),
                    valid: ActiveValue::Set(valid),
                    expires_at: ActiveValue::Set(Some(now + Duration::minutes(20))),
                    last_login_at: ActiveValue::Set(Some(now)),
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                    ..Default::default()
                },
            )
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert an NPC station into the static dataset table.
    pub async fn insert_mock_station(
        &self,
        station_id: i64,
        name: &str,
    ) -> Result<entity::sde_station::Model, TestError> {
        Ok(
            entity::prelude::SdeStation::insert(entity::sde_station::ActiveModel {
                station_id: ActiveValue::Set(station_id),
                name: ActiveValue::Set(name.to_string()),
                solar_system_id: ActiveValue::Set(Some(30000142)),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a player-owned structure.
    pub async fn insert_mock_structure(
        &self,
        structure_id: i64,
        name: &str,
    ) -> Result<entity::eve_structure::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::EveStructure::insert(entity::eve_structure::ActiveModel {
                structure_id: ActiveValue::Set(structure_id),
                name: ActiveValue::Set(name.to_string()),
                type_id: ActiveValue::Set(Some(35832)),
                solar_system_id: ActiveValue::Set(Some(30000142)),
                owner_id: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert one member tracking row.
    pub async fn insert_mock_member_tracking(
        &self,
        corporation_id: i64,
        character_id: i64,
    ) -> Result<entity::eve_corporation_member_tracking::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::EveCorporationMemberTracking::insert(
            entity::eve_corporation_member_tracking::ActiveModel {
                corporation_id: ActiveValue::Set(corporation_id),
                character_id: ActiveValue::Set(character_id),
                base_id: ActiveValue::Set(None),
                location_id: ActiveValue::Set(None),
                logon_date: ActiveValue::Set(None),
                logoff_date: ActiveValue::Set(None),
                ship_type_id: ActiveValue::Set(None),
                start_date: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
