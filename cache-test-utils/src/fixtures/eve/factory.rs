//! Mock ESI payloads.
//!
//! Payloads are raw JSON as ESI serves them. Some numbers are deliberately sent as floating
//! point values, ESI is not consistent about integer encoding.

use serde_json::{json, Value};

/// CEO of the mock corporation.
pub const MOCK_CEO_ID: i64 = 661916654;

/// Create a mock `/corporations/{corporation_id}` payload.
///
/// # Arguments
/// - `alliance_id` - Optional alliance ID the corporation belongs to
/// - `ceo_id` - CEO character ID
///
/// # Returns
/// - `Value` - Corporation payload with test data
pub fn mock_corporation(alliance_id: Option<i64>, ceo_id: i64) -> Value {
    let mut corporation = json!({
        "ceo_id": ceo_id,
        "creator_id": 2114794365,
        "date_founded": "2024-10-07T21:43:09Z",
        "home_station_id": 60003760.0,
        "member_count": 21.0,
        "name": "The Order of Autumn",
        "shares": 1000,
        "tax_rate": 0.1,
        "ticker": "F4LL.",
        "url": "https://autumn-order.com",
        "war_eligible": true
    });

    if let Some(alliance_id) = alliance_id {
        corporation["alliance_id"] = json!(alliance_id);
    }

    corporation
}

/// Create a mock corporation payload with a custom name, ticker and member count.
pub fn mock_named_corporation(name: &str, ticker: &str, member_count: i64) -> Value {
    json!({
        "ceo_id": MOCK_CEO_ID,
        "member_count": member_count,
        "name": name,
        "tax_rate": 0.1,
        "ticker": ticker
    })
}

/// Create one entry of a mock `/corporations/{corporation_id}/membertracking` payload.
///
/// # Arguments
/// - `character_id` - Member character ID
/// - `location_id` - Location of the member, station or structure
pub fn mock_member_tracking_entry(character_id: i64, location_id: i64) -> Value {
    json!({
        "base_id": 60003760,
        "character_id": character_id as f64,
        "location_id": location_id,
        "logoff_date": "2025-10-01T12:00:00Z",
        "logon_date": "2025-10-01T10:00:00Z",
        "ship_type_id": 670,
        "start_date": "2024-10-07T21:43:09Z"
    })
}

/// Create a mock `/corporations/{corporation_id}/alliancehistory` payload.
///
/// ESI serves the most recent entry first.
pub fn mock_alliance_history(alliance_ids: &[Option<i64>]) -> Value {
    let entries: Vec<Value> = alliance_ids
        .iter()
        .enumerate()
        .rev()
        .map(|(index, alliance_id)| {
            let mut entry = json!({
                "record_id": index as i64 + 1,
                "start_date": format!("20{:02}-01-01T00:00:00Z", 10 + index),
            });
            if let Some(alliance_id) = alliance_id {
                entry["alliance_id"] = json!(alliance_id);
            }
            entry
        })
        .collect();

    Value::Array(entries)
}
