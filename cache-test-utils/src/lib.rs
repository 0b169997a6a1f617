//! Test utilities for the corporation cache.
//!
//! [`TestSetup`] pairs an in-memory SQLite database with a mockito server standing in for
//! ESI. [`TestBuilder`] declares tables, rows and endpoints up front; the
//! [`test_setup_with_tables!`] macro covers tests that only need empty tables.

pub mod builder;
pub mod constant;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use builder::TestBuilder;
pub use error::TestError;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{
        constant::TEST_USER_AGENT, fixtures::eve::factory, test_setup_with_tables, TestBuilder,
        TestError, TestSetup,
    };
}
