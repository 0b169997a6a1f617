//! Cache-aside service for EVE Online corporation data.
//!
//! Corporations are served from a relational cache and fetched from ESI on a miss. A cron
//! trigger periodically refreshes every cached corporation and validates the credentials of
//! the CEOs whose member data is accessed.

pub mod server;
