//! Test fixture modules for database and HTTP mock creation.
//!
//! - `eve` - cached corporations, member tracking, locations, credentials and the ESI
//!   endpoints serving them

pub mod eve;
