//! Time zone catalog and display helpers.
//!
//! This module provides functionality for:
//! - The curated catalog of common zone identifiers
//! - Display names derived from zone identifiers
//! - Current local time labels for listings

pub mod catalog;
pub mod display;
pub mod local_time;

pub use catalog::{COMMON_TIMEZONES, common_timezones};
pub use display::{area_from_tz, city_from_os_tz, city_from_tz, group_by_area, zone_label};
pub use local_time::local_time_label;

use std::collections::HashSet;

/// Merge the catalog with additional identifiers.
///
/// Catalog entries come first in their fixed order, followed by `extra` in
/// the order given. Identifiers already present are skipped, so the result
/// never contains duplicates.
pub fn merge_with_catalog<'a>(extra: &'a [String]) -> Vec<&'a str> {
    let mut merged: Vec<&'a str> = common_timezones().to_vec();
    let mut seen: HashSet<&'a str> = merged.iter().copied().collect();

    for tz in extra {
        let tz = tz.as_str();
        if seen.insert(tz) {
            merged.push(tz);
        }
    }

    merged
}
