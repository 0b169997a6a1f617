//! EVE Online-specific ID range helpers.
//!
//! Location IDs handed out by ESI share a single numeric space. NPC stations occupy a
//! fixed range and are described by the static data export, while player-owned structures
//! use large IDs outside any static range and must be looked up in the structure cache.

/// Inclusive range of NPC station IDs covered by the static data export.
pub const NPC_STATION_ID_RANGE: std::ops::RangeInclusive<i64> = 60_000_000..=63_999_999;

/// Returns true if the location ID belongs to an NPC station.
///
/// # Example
/// ```ignore
/// assert!(is_npc_station_id(60_003_760));      // Jita IV - Moon 4
/// assert!(!is_npc_station_id(1_029_999_999_999)); // Player structure
/// ```
pub fn is_npc_station_id(location_id: i64) -> bool {
    NPC_STATION_ID_RANGE.contains(&location_id)
}
