use chrono::{TimeZone, Utc};
use chrono_tz::Tz;
use serial_test::serial;
use std::collections::HashSet;
use std::fs;
use tempfile::tempdir;

use tzlist::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use tzlist::zones::{group_by_area, local_time_label, merge_with_catalog, zone_label};
use tzlist::{COMMON_TIMEZONES, Config, city_from_tz, common_timezones};

#[test]
fn test_catalog_accessor_returns_constant() {
    assert_eq!(common_timezones(), COMMON_TIMEZONES);
}

#[test]
fn test_catalog_zones_are_known_to_tz_database() {
    for tz in common_timezones() {
        assert!(tz.parse::<Tz>().is_ok(), "{} is not in chrono-tz", tz);
    }
}

#[test]
fn test_catalog_local_times_render() {
    let now = Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap();
    for tz in common_timezones() {
        assert!(local_time_label(tz, now).is_some(), "No local time for {}", tz);
    }
}

#[test]
fn test_catalog_grouping_by_area() {
    let groups = group_by_area(common_timezones().iter().copied());
    let areas: Vec<&str> = groups.iter().map(|(area, _)| *area).collect();

    assert_eq!(
        areas,
        vec![
            "Africa",
            "America",
            "Asia",
            "Atlantic",
            "Australia",
            "Europe",
            "Pacific",
            "US",
            "UTC"
        ]
    );
}

#[test]
fn test_concrete_display_names() {
    assert_eq!(city_from_tz("America/New_York"), "New York");
    assert_eq!(city_from_tz("Asia/Kolkata"), "Kolkata");
    assert_eq!(city_from_tz("America/Argentina/Buenos_Aires"), "Buenos Aires");
    assert_eq!(city_from_tz("UTC"), "UTC");
    assert_eq!(city_from_tz("US/Eastern"), "Eastern");
    assert_eq!(zone_label("Asia/Kuala_Lumpur"), "Kuala Lumpur (Asia)");
}

#[test]
fn test_catalog_usable_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                common_timezones()
                    .iter()
                    .map(|tz| city_from_tz(tz))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let results: Vec<Vec<String>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
#[serial]
fn test_config_extra_zones_merge_with_catalog() {
    let temp_dir = tempdir().unwrap();
    let config_dir = temp_dir.path().join(CONFIG_DIR_NAME);
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join(CONFIG_FILE_NAME),
        r#"extra_zones = ["Asia/Dhaka", "UTC", "America/Lima", "Asia/Dhaka"]"#,
    )
    .unwrap();

    let original = std::env::var("XDG_CONFIG_HOME").ok();
    unsafe {
        std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());
    }

    let config = Config::load();

    unsafe {
        match original {
            Some(val) => std::env::set_var("XDG_CONFIG_HOME", val),
            None => std::env::remove_var("XDG_CONFIG_HOME"),
        }
    }

    let config = config.unwrap();
    let merged = merge_with_catalog(config.extra_zones());

    let unique: HashSet<&str> = merged.iter().copied().collect();
    assert_eq!(unique.len(), merged.len());
    assert_eq!(&merged[..common_timezones().len()], common_timezones());
    assert_eq!(
        &merged[common_timezones().len()..],
        &["Asia/Dhaka", "America/Lima"]
    );
}

#[test]
#[serial]
fn test_config_invalid_extra_zone_is_reported() {
    let temp_dir = tempdir().unwrap();
    let config_dir = temp_dir.path().join(CONFIG_DIR_NAME);
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join(CONFIG_FILE_NAME),
        r#"extra_zones = ["New York"]"#,
    )
    .unwrap();

    let original = std::env::var("XDG_CONFIG_HOME").ok();
    unsafe {
        std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());
    }

    let result = Config::load();

    unsafe {
        match original {
            Some(val) => std::env::set_var("XDG_CONFIG_HOME", val),
            None => std::env::remove_var("XDG_CONFIG_HOME"),
        }
    }

    let err = result.unwrap_err();
    assert!(format!("{:#}", err).contains("whitespace is not allowed"));
}
