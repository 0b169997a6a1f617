//! Constants shared by tests.
//!
//! None of these are real identifiers or credentials.

/// User agent for test ESI clients.
pub static TEST_USER_AGENT: &str =
    "esi-cache-test/1.0 (contact@example.com; +https://github.com/autumn-order/esi-cache)";

/// Access token stored for mock credentials and expected by authenticated mock endpoints.
pub static TEST_ACCESS_TOKEN: &str = "test_access_token";

/// A real NPC station, Jita IV - Moon 4 - Caldari Navy Assembly Plant.
pub const TEST_STATION_ID: i64 = 60003760;

/// A player-owned structure ID, outside of the NPC station range.
pub const TEST_STRUCTURE_ID: i64 = 1029999999999;
