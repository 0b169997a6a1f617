//! Utility functions and helpers.
//!
//! This module contains shared helpers used across the service: defensive coercion of
//! loosely typed ESI payload values and EVE Online ID range checks.

pub mod coerce;
pub mod eve;
