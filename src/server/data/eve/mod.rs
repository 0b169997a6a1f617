//! EVE Online data repositories.
//!
//! Each repository handles a specific table and provides methods for reading cached data,
//! writing ESI data back, and the query planning used by corporation search.

pub mod corporation;
pub mod member_tracking;
pub mod search;
pub mod station;
pub mod structure;
