//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations, organized by
//! domain. `eve` holds the cached EVE Online data and the static reference dataset,
//! `credential` backs the bundled credential provider.

pub mod credential;
pub mod eve;
