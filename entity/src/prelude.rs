pub use super::eve_character_credential::Entity as EveCharacterCredential;
pub use super::eve_corporation::Entity as EveCorporation;
pub use super::eve_corporation_member_tracking::Entity as EveCorporationMemberTracking;
pub use super::eve_corporation_setting::Entity as EveCorporationSetting;
pub use super::eve_structure::Entity as EveStructure;
pub use super::sde_station::Entity as SdeStation;
