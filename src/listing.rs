//! Zone listing options and line rendering for the `tzlist` binary.

use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::constants::UNKNOWN_LOCAL_TIME;
use crate::logger::Log;
use crate::zones::{city_from_tz, local_time_label};

/// Options for one listing run, after merging flags with the config file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListOptions {
    pub debug_enabled: bool,
    pub grouped: bool,
    pub times: bool,
}

impl ListOptions {
    /// Combine command-line flags with config toggles.
    ///
    /// A flag can only switch an option on; it never overrides an enabled
    /// config toggle.
    pub fn resolve(debug_enabled: bool, grouped: bool, times: bool, config: &Config) -> Self {
        Self {
            debug_enabled,
            grouped: grouped || config.group_by_area(),
            times: times || config.show_local_time(),
        }
    }
}

/// Render one listing line: `identifier → City`, followed by the local time
/// at `now` when times are enabled.
///
/// Zones unknown to the tz database get the `--:--` placeholder.
pub fn format_zone_line(tz: &str, options: &ListOptions, now: DateTime<Utc>) -> String {
    let city = city_from_tz(tz);
    if !options.times {
        return format!("{} → {}", tz, city);
    }

    let time = local_time_label(tz, now);
    if time.is_none() && options.debug_enabled {
        Log::log_warning(&format!("{} is not in the tz database", tz));
    }
    format!(
        "{} → {} {}",
        tz,
        city,
        time.as_deref().unwrap_or(UNKNOWN_LOCAL_TIME)
    )
}
