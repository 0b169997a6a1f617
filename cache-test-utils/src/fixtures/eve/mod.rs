//! Corporation cache fixtures.
//!
//! - `data` - rows inserted directly through the entities
//! - `factory` - raw ESI JSON payloads
//! - `mockito` - ESI endpoints on the test's mock server

use crate::TestSetup;

pub mod data;
pub mod factory;
pub mod mockito;

impl TestSetup {
    /// Fixture helpers operating on this setup's database and mock server.
    pub fn eve(&mut self) -> EveFixtures<'_> {
        EveFixtures { setup: self }
    }
}

pub struct EveFixtures<'a> {
    pub setup: &'a mut TestSetup,
}
