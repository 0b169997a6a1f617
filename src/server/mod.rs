//! Server application core modules.
//!
//! Configuration, database repositories, the ESI client, the corporation services and the
//! cron scheduler triggering bulk refresh and credential validation.

pub mod config;
pub mod data;
pub mod error;
pub mod esi;
pub mod model;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod util;
