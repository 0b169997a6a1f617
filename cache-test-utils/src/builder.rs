//! Declarative test builder.
//!
//! Configuration methods queue tables, database fixtures and mock endpoints, everything is
//! executed in the final `build()` call.

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};
use serde_json::Value;

use crate::{error::TestError, TestSetup};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_cache_tables: bool,

    // Database fixtures to insert
    corporations: Vec<(i64, Option<i64>)>, // (corporation_id, ceo_id)
    corporation_settings: Vec<(i64, bool)>, // (corporation_id, enabled)
    credentials: Vec<(i64, Option<i64>, bool)>, // (character_id, corporation_id, valid)
    stations: Vec<(i64, String)>,
    structures: Vec<(i64, String)>,

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,
    corporation_endpoints: Vec<(i64, Value, usize)>,
    member_tracking_endpoints: Vec<(i64, Value, usize)>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables, fixtures, or mock endpoints configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_cache_tables: false,
            corporations: Vec::new(),
            corporation_settings: Vec::new(),
            credentials: Vec::new(),
            stations: Vec::new(),
            structures: Vec::new(),
            mock_builders: Vec::new(),
            corporation_endpoints: Vec::new(),
            member_tracking_endpoints: Vec::new(),
        }
    }

    /// Add every table of the cache to the test database.
    pub fn with_cache_tables(mut self) -> Self {
        self.include_cache_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use cache_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), cache_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(EveCorporation)
    ///     .with_table(EveCorporationSetting)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a mock corporation into the database.
    pub fn with_mock_corporation(mut self, corporation_id: i64, ceo_id: Option<i64>) -> Self {
        self.corporations.push((corporation_id, ceo_id));
        self
    }

    /// Insert a corporation setting into the database.
    pub fn with_corporation_setting(mut self, corporation_id: i64, enabled: bool) -> Self {
        self.corporation_settings.push((corporation_id, enabled));
        self
    }

    /// Insert a credential carrying the test access token into the database.
    pub fn with_mock_credential(
        mut self,
        character_id: i64,
        corporation_id: Option<i64>,
        valid: bool,
    ) -> Self {
        self.credentials.push((character_id, corporation_id, valid));
        self
    }

    /// Insert an NPC station into the static dataset table.
    pub fn with_mock_station(mut self, station_id: i64, name: impl Into<String>) -> Self {
        self.stations.push((station_id, name.into()));
        self
    }

    /// Insert a player-owned structure into the database.
    pub fn with_mock_structure(mut self, structure_id: i64, name: impl Into<String>) -> Self {
        self.structures.push((structure_id, name.into()));
        self
    }

    /// Add a mock `/corporations/{corporation_id}` endpoint called `expected_requests` times.
    pub fn with_corporation_endpoint(
        mut self,
        corporation_id: i64,
        payload: Value,
        expected_requests: usize,
    ) -> Self {
        self.corporation_endpoints
            .push((corporation_id, payload, expected_requests));
        self
    }

    /// Add a mock `/corporations/{corporation_id}/membertracking` endpoint called
    /// `expected_requests` times.
    pub fn with_member_tracking_endpoint(
        mut self,
        corporation_id: i64,
        payload: Value,
        expected_requests: usize,
    ) -> Self {
        self.member_tracking_endpoints
            .push((corporation_id, payload, expected_requests));
        self
    }

    /// Add a custom mock endpoint with full control over the mock server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test setup.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (cache tables if specified, then custom tables)
    /// 2. Inserts database fixtures
    /// 3. Creates mock HTTP endpoints
    ///
    /// # Returns
    /// - `Ok(TestSetup)` - Configured test environment
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let mut setup = TestSetup::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_cache_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::EveCorporation),
                schema.create_table_from_entity(entity::prelude::EveCorporationMemberTracking),
                schema.create_table_from_entity(entity::prelude::EveCorporationSetting),
                schema.create_table_from_entity(entity::prelude::EveCharacterCredential),
                schema.create_table_from_entity(entity::prelude::EveStructure),
                schema.create_table_from_entity(entity::prelude::SdeStation),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for (corporation_id, ceo_id) in self.corporations {
            setup
                .eve()
                .insert_mock_corporation(corporation_id, ceo_id)
                .await?;
        }

        for (corporation_id, enabled) in self.corporation_settings {
            setup
                .eve()
                .insert_corporation_setting(corporation_id, enabled)
                .await?;
        }

        for (character_id, corporation_id, valid) in self.credentials {
            setup
                .eve()
                .insert_mock_credential(character_id, corporation_id, valid)
                .await?;
        }

        for (station_id, name) in self.stations {
            setup.eve().insert_mock_station(station_id, &name).await?;
        }

        for (structure_id, name) in self.structures {
            setup.eve().insert_mock_structure(structure_id, &name).await?;
        }

        // 3. Create mock endpoints, custom endpoints first so tests can queue an error
        // response ahead of a success response for the same path
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (corporation_id, payload, expected) in self.corporation_endpoints {
            mocks.push(
                setup
                    .eve()
                    .create_corporation_endpoint(corporation_id, payload, expected),
            );
        }

        for (corporation_id, payload, expected) in self.member_tracking_endpoints {
            mocks.push(
                setup
                    .eve()
                    .create_member_tracking_endpoint(corporation_id, payload, expected),
            );
        }

        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
