//! EVE Online corporation services.
//!
//! [`corporation::CorporationService`] is the single entry point; its operations are split
//! across the submodules by concern.

pub mod corporation;
pub mod credential;
pub mod location;
pub mod member_tracking;
pub mod refresh;
