//! Application constants and default values for tzlist.

// ═══ Configuration Files ═══

pub const CONFIG_DIR_NAME: &str = "tzlist";
pub const CONFIG_FILE_NAME: &str = "tzlist.toml";

// ═══ Configuration Defaults ═══
// Used when options are not present in the config file

pub const DEFAULT_GROUP_BY_AREA: bool = false;
pub const DEFAULT_SHOW_LOCAL_TIME: bool = false;

// ═══ Display ═══

/// chrono format for local time labels, e.g. `17:30 (UTC+05:30)`
pub const LOCAL_TIME_FORMAT: &str = "%H:%M (UTC%:z)";

/// Shown in place of a local time when the zone is unknown to the tz database
pub const UNKNOWN_LOCAL_TIME: &str = "--:--";

// ═══ Exit Codes ═══

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
