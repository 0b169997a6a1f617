//! Output DTOs returned by the service layer.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::server::model::{
    db::EveCorporationModel,
    eve::{AllianceHistoryEntry, CorporationInfo, MemberTrackingEntry},
};

/// Corporation information returned to callers.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CorporationDto {
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
    pub updated_at: NaiveDateTime,
}

impl From<EveCorporationModel> for CorporationDto {
    fn from(model: EveCorporationModel) -> Self {
        Self {
            corporation_id: model.corporation_id,
            name: model.name,
            ticker: model.ticker,
            description: model.description,
            alliance_id: model.alliance_id,
            faction_id: model.faction_id,
            ceo_id: model.ceo_id,
            creator_id: model.creator_id,
            date_founded: model.date_founded,
            member_count: model.member_count,
            shares: model.shares,
            tax_rate: model.tax_rate,
            home_station_id: model.home_station_id,
            url: model.url,
            war_eligible: model.war_eligible,
            updated_at: model.updated_at,
        }
    }
}

impl CorporationDto {
    /// Builds the DTO from freshly fetched data that could not be written to the cache.
    pub fn from_info(info: CorporationInfo, updated_at: NaiveDateTime) -> Self {
        Self {
            corporation_id: info.corporation_id,
            name: info.name,
            ticker: info.ticker,
            description: info.description,
            alliance_id: info.alliance_id,
            faction_id: info.faction_id,
            ceo_id: info.ceo_id,
            creator_id: info.creator_id,
            date_founded: info.date_founded,
            member_count: info.member_count,
            shares: info.shares,
            tax_rate: info.tax_rate,
            home_station_id: info.home_station_id,
            url: info.url,
            war_eligible: info.war_eligible,
            updated_at,
        }
    }
}

/// Member tracking entry with its location name resolved.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MemberTrackingDto {
    pub character_id: i64,
    pub base_id: Option<i64>,
    pub location_id: Option<i64>,
    /// `None` when the location is unknown to both the static dataset and the structure cache
    pub location_name: Option<String>,
    pub logon_date: Option<NaiveDateTime>,
    pub logoff_date: Option<NaiveDateTime>,
    pub ship_type_id: Option<i64>,
    pub start_date: Option<NaiveDateTime>,
}

impl MemberTrackingDto {
    pub fn new(entry: MemberTrackingEntry, location_name: Option<String>) -> Self {
        Self {
            character_id: entry.character_id,
            base_id: entry.base_id,
            location_id: entry.location_id,
            location_name,
            logon_date: entry.logon_date,
            logoff_date: entry.logoff_date,
            ship_type_id: entry.ship_type_id,
            start_date: entry.start_date,
        }
    }
}

/// Alliance history entry returned to callers.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AllianceHistoryDto {
    pub record_id: i64,
    pub alliance_id: Option<i64>,
    pub is_deleted: bool,
    pub start_date: Option<NaiveDateTime>,
}

impl From<AllianceHistoryEntry> for AllianceHistoryDto {
    fn from(entry: AllianceHistoryEntry) -> Self {
        Self {
            record_id: entry.record_id,
            alliance_id: entry.alliance_id,
            is_deleted: entry.is_deleted,
            start_date: entry.start_date,
        }
    }
}

/// Outcome of a bulk refresh run with no failures.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BulkRefreshSummary {
    pub total: usize,
    pub succeeded: usize,
}

/// Principal whose credential is missing or invalid.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CredentialIssue {
    pub character_id: i64,
    pub status: CredentialStatus,
    /// Known only when the provider has a profile for the principal
    pub name: Option<String>,
    pub corporation_id: Option<i64>,
    pub expires_at: Option<NaiveDateTime>,
    pub last_login_at: Option<NaiveDateTime>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialStatus {
    Missing,
    Invalid,
}

/// Summary of a credential validation run.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct CredentialReport {
    pub valid: usize,
    pub invalid: usize,
    pub missing: usize,
    pub issues: Vec<CredentialIssue>,
}

impl CredentialReport {
    /// Character IDs of principals with an invalid credential
    pub fn invalid_ids(&self) -> Vec<i64> {
        self.ids_with_status(CredentialStatus::Invalid)
    }

    /// Character IDs of principals without a credential profile
    pub fn missing_ids(&self) -> Vec<i64> {
        self.ids_with_status(CredentialStatus::Missing)
    }

    fn ids_with_status(&self, status: CredentialStatus) -> Vec<i64> {
        self.issues
            .iter()
            .filter(|issue| issue.status == status)
            .map(|issue| issue.character_id)
            .collect()
    }
}
