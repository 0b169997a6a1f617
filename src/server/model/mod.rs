//! Data models for the cache service.
//!
//! - `eve` - Normalized ESI payloads, converted from loosely typed JSON
//! - `api` - Output DTOs returned to callers
//! - `db` - Type aliases for SeaORM entity models

pub mod api;
pub mod db;
pub mod eve;
