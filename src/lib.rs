//! # Vaktijar
//!
//! Daily prayer times (vaktija) for Bosnia and Herzegovina, fetched from
//! api.vaktija.ba, cached for the day, and queried from the command line.
//!
//! ## Architecture
//!
//! - **temporal**: Clock-time values, parsing and the wheel arithmetic
//! - **vaktija**: The six-slot schedule model, decoding and slot queries
//! - **api**: Blocking HTTP fetch of the raw JSON document
//! - **cache**: The flat cache file and its day-granular freshness check
//! - **config**: TOML configuration loading and validation
//! - **args**: Command-line argument parsing
//! - **constants**: Application-wide constants and defaults
//! - **logger**: Structured terminal output with visual formatting

pub mod api;
pub mod args;
pub mod cache;
pub mod config;
pub mod constants;
pub mod error;
pub mod logger;
pub mod temporal;
pub mod vaktija;

// Re-export important types for easier access
pub use config::Config;
pub use error::VaktijaError;
pub use logger::Log;
pub use temporal::{TimeOfDay, TimeSpan};
pub use vaktija::{VAKAT_COUNT, VAKAT_NAMES, Vaktija};
