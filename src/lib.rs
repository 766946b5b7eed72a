//! # tzlist
//!
//! A curated catalog of common time zone identifiers and a formatter that
//! turns an identifier into a display-friendly city name.
//!
//! ```
//! assert!(tzlist::common_timezones().contains(&"UTC"));
//! assert_eq!(tzlist::city_from_tz("America/Argentina/Buenos_Aires"), "Buenos Aires");
//! ```
//!
//! ## Architecture
//!
//! - **zones**: The zone catalog, display helpers and local time labels
//! - **listing**: Listing options and line rendering for the `tzlist` binary
//! - **config**: Optional TOML configuration for the `tzlist` binary
//! - **args**: Command-line parsing for the `tzlist` binary
//! - **constants**: Defaults, file names and exit codes
//! - **logger**: Structured console output

pub mod args;
pub mod config;
pub mod constants;
pub mod listing;
pub mod logger;
pub mod zones;

pub use config::Config;
pub use logger::{Log, LogLevel};
pub use zones::{COMMON_TIMEZONES, city_from_os_tz, city_from_tz, common_timezones};
