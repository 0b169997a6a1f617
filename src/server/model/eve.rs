//! Normalized ESI payloads.
//!
//! ESI responses are handled as raw JSON and converted here through the helpers in
//! [`crate::server::util::coerce`], so integer fields delivered as floating point values
//! still convert.

use chrono::NaiveDateTime;
use serde_json::Value;

use crate::server::{
    error::esi::EsiError,
    util::coerce::{
        coerce_to_i64, optional_bool, optional_i64, optional_id, optional_string, optional_timestamp,
        required_f64, required_i64, required_string,
    },
};

/// Corporation information as stored in the cache.
#[derive(Debug, Clone, PartialEq)]
pub struct CorporationInfo {
    pub corporation_id: i64,
    pub name: String,
    pub ticker: String,
    pub description: Option<String>,
    pub alliance_id: Option<i64>,
    pub faction_id: Option<i64>,
    pub ceo_id: Option<i64>,
    pub creator_id: Option<i64>,
    pub date_founded: Option<NaiveDateTime>,
    pub member_count: i64,
    pub shares: Option<i64>,
    pub tax_rate: f64,
    pub home_station_id: Option<i64>,
    pub url: Option<String>,
    pub war_eligible: Option<bool>,
}

impl CorporationInfo {
    /// Converts an ESI `/corporations/{corporation_id}` payload.
    ///
    /// ESI does not echo the corporation ID in the body, so it is passed in by the caller.
    ///
    /// # Returns
    /// - `Ok(CorporationInfo)` - Payload converted
    /// - `Err(EsiError::InvalidPayload)` - `name`, `ticker`, `member_count` or `tax_rate`
    ///   missing or not coercible
    pub fn from_payload(corporation_id: i64, payload: &Value) -> Result<Self, EsiError> {
        Ok(Self {
            corporation_id,
            name: required_string(payload, "name")?,
            ticker: required_string(payload, "ticker")?,
            description: optional_string(payload, "description"),
            alliance_id: optional_id(payload, "alliance_id"),
            faction_id: optional_id(payload, "faction_id"),
            // ESI uses 1 as the CEO of closed corporations
            ceo_id: optional_id(payload, "ceo_id").filter(|id| *id != 1),
            creator_id: optional_id(payload, "creator_id"),
            date_founded: optional_timestamp(payload, "date_founded"),
            member_count: required_i64(payload, "member_count")?,
            shares: optional_i64(payload, "shares"),
            tax_rate: required_f64(payload, "tax_rate")?,
            home_station_id: optional_id(payload, "home_station_id"),
            url: optional_string(payload, "url"),
            war_eligible: optional_bool(payload, "war_eligible"),
        })
    }
}

/// One entry of a corporation's member tracking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberTrackingEntry {
    pub character_id: i64,
    pub base_id: Option<i64>,
    pub location_id: Option<i64>,
    pub logon_date: Option<NaiveDateTime>,
    pub logoff_date: Option<NaiveDateTime>,
    pub ship_type_id: Option<i64>,
    pub start_date: Option<NaiveDateTime>,
}

impl MemberTrackingEntry {
    /// Converts one element of an ESI `/corporations/{corporation_id}/membertracking` payload.
    ///
    /// Zero IDs and zero timestamps are treated as absent.
    pub fn from_payload(payload: &Value) -> Result<Self, EsiError> {
        Ok(Self {
            character_id: optional_id(payload, "character_id")
                .ok_or_else(|| EsiError::missing_field("character_id"))?,
            base_id: optional_id(payload, "base_id"),
            location_id: optional_id(payload, "location_id"),
            logon_date: optional_timestamp(payload, "logon_date"),
            logoff_date: optional_timestamp(payload, "logoff_date"),
            ship_type_id: optional_id(payload, "ship_type_id"),
            start_date: optional_timestamp(payload, "start_date"),
        })
    }
}

/// One entry of a corporation's alliance history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllianceHistoryEntry {
    pub record_id: i64,
    /// `None` when the corporation left its alliance without joining another
    pub alliance_id: Option<i64>,
    pub is_deleted: bool,
    pub start_date: Option<NaiveDateTime>,
}

impl AllianceHistoryEntry {
    pub fn from_payload(payload: &Value) -> Result<Self, EsiError> {
        Ok(Self {
            record_id: required_i64(payload, "record_id")?,
            alliance_id: optional_id(payload, "alliance_id"),
            is_deleted: optional_bool(payload, "is_deleted").unwrap_or(false),
            start_date: optional_timestamp(payload, "start_date"),
        })
    }
}

/// Returns the alliance the corporation currently belongs to.
///
/// `history` must be chronological with the most recent entry last. A last entry without an
/// alliance ID means the corporation is currently not in an alliance.
pub fn current_alliance_id(history: &[AllianceHistoryEntry]) -> Option<i64> {
    history.last().and_then(|entry| entry.alliance_id)
}

/// Converts a complete `/corporations/{corporation_id}/membertracking` payload.
pub fn member_tracking_from_payload(payload: &Value) -> Result<Vec<MemberTrackingEntry>, EsiError> {
    payload_array(payload)?
        .iter()
        .map(MemberTrackingEntry::from_payload)
        .collect()
}

/// Converts a `/corporations/{corporation_id}/members` payload into character IDs.
pub fn member_ids_from_payload(payload: &Value) -> Result<Vec<i64>, EsiError> {
    payload_array(payload)?
        .iter()
        .map(|value| coerce_to_i64(value).ok_or_else(|| EsiError::missing_field("character_id")))
        .collect()
}

/// Converts a `/corporations/{corporation_id}/alliancehistory` payload.
///
/// ESI lists the most recent entry first; the result is chronological, most recent last.
pub fn alliance_history_from_payload(
    payload: &Value,
) -> Result<Vec<AllianceHistoryEntry>, EsiError> {
    let mut history = payload_array(payload)?
        .iter()
        .map(AllianceHistoryEntry::from_payload)
        .collect::<Result<Vec<_>, _>>()?;

    history.sort_by_key(|entry| entry.record_id);

    Ok(history)
}

fn payload_array(payload: &Value) -> Result<&Vec<Value>, EsiError> {
    payload
        .as_array()
        .ok_or_else(|| EsiError::missing_field("[]"))
}
