//! SeaORM entity definitions for the corporation cache.

pub mod prelude;

pub mod eve_character_credential;
pub mod eve_corporation;
pub mod eve_corporation_member_tracking;
pub mod eve_corporation_setting;
pub mod eve_structure;
pub mod sde_station;
