//! Display formatting for zone identifiers.
//!
//! These helpers turn identifiers such as `America/Argentina/Buenos_Aires`
//! into labels suitable for menus. None of them check that the identifier
//! names a real zone.

use anyhow::Result;
use std::ffi::OsStr;

/// Separator between the segments of a zone identifier.
const SEGMENT_SEPARATOR: char = '/';

/// Derive a city name from a zone identifier.
///
/// Takes the last `/`-separated segment and replaces every underscore with
/// a space. Identifiers without a separator are returned as-is apart from
/// the underscore substitution.
///
/// # Examples
/// ```
/// use tzlist::city_from_tz;
///
/// assert_eq!(city_from_tz("America/New_York"), "New York");
/// assert_eq!(city_from_tz("UTC"), "UTC");
/// ```
pub fn city_from_tz(tz: &str) -> String {
    let last = tz.rsplit(SEGMENT_SEPARATOR).next().unwrap_or(tz);
    last.replace('_', " ")
}

/// Derive a city name from an identifier that came from the OS.
///
/// Identifiers read from the environment or from file names are not
/// guaranteed to be UTF-8; those are rejected instead of being mangled.
///
/// # Returns
/// * `Ok(city)` - The display name for a valid UTF-8 identifier
/// * `Err(_)` - If the identifier is not valid UTF-8
pub fn city_from_os_tz(tz: &OsStr) -> Result<String> {
    match tz.to_str() {
        Some(tz) => Ok(city_from_tz(tz)),
        None => anyhow::bail!(
            "Time zone identifier is not valid UTF-8: {}",
            tz.to_string_lossy()
        ),
    }
}

/// Get the area (first segment) of a zone identifier.
///
/// Returns `None` for identifiers without a separator such as `UTC`.
pub fn area_from_tz(tz: &str) -> Option<&str> {
    tz.split_once(SEGMENT_SEPARATOR).map(|(area, _)| area)
}

/// Format a menu label of the form `City (Area)`.
pub fn zone_label(tz: &str) -> String {
    let city = city_from_tz(tz);
    match area_from_tz(tz) {
        Some(area) => format!("{} ({})", city, area.replace('_', " ")),
        None => city,
    }
}

/// Group identifiers by area, keeping the order in which areas first appear.
///
/// Identifiers without an area are grouped under their own name.
pub fn group_by_area<'a, I>(zones: I) -> Vec<(&'a str, Vec<&'a str>)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut groups: Vec<(&'a str, Vec<&'a str>)> = Vec::new();

    for tz in zones {
        let area = area_from_tz(tz).unwrap_or(tz);
        match groups.iter_mut().find(|(key, _)| *key == area) {
            Some((_, members)) => members.push(tz),
            None => groups.push((area, vec![tz])),
        }
    }

    groups
}
