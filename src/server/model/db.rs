//! Database model type aliases.

/// Cached EVE Online corporation.
///
/// Rows with `deleted_at` set are soft-deleted and excluded from every read.
pub type EveCorporationModel = entity::eve_corporation::Model;
