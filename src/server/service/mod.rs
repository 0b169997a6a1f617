//! Service layer for business logic.
//!
//! Services decide between the cache and ESI, write fetched data back and enforce the
//! authorization gate of member-level data.

pub mod eve;
pub mod inflight;
