//! Current local time rendering for zone listings.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::constants::LOCAL_TIME_FORMAT;

/// Render the local time in `tz` at `now` as `HH:MM (UTC±hh:mm)`.
///
/// Returns `None` when the identifier is unknown to the bundled tz database.
pub fn local_time_label(tz: &str, now: DateTime<Utc>) -> Option<String> {
    let zone: Tz = tz.parse().ok()?;
    let local = now.with_timezone(&zone);
    Some(local.format(LOCAL_TIME_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_instant() -> DateTime<Utc> {
        // Mid-January, outside any daylight saving period in the north
        Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_local_time_label_utc() {
        assert_eq!(
            local_time_label("UTC", fixed_instant()).as_deref(),
            Some("12:00 (UTC+00:00)")
        );
    }

    #[test]
    fn test_local_time_label_offset_zone() {
        assert_eq!(
            local_time_label("Asia/Kolkata", fixed_instant()).as_deref(),
            Some("17:30 (UTC+05:30)")
        );
        assert_eq!(
            local_time_label("America/New_York", fixed_instant()).as_deref(),
            Some("07:00 (UTC-05:00)")
        );
    }

    #[test]
    fn test_local_time_label_legacy_alias() {
        assert_eq!(
            local_time_label("US/Pacific", fixed_instant()).as_deref(),
            Some("04:00 (UTC-08:00)")
        );
    }

    #[test]
    fn test_local_time_label_unknown_zone() {
        assert!(local_time_label("Mars/Olympus_Mons", fixed_instant()).is_none());
    }
}
