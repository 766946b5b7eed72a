use anyhow::{Context, Result};
use chrono::Utc;

use tzlist::args::{self, CliAction, ParsedArgs};
use tzlist::constants::*;
use tzlist::listing::{ListOptions, format_zone_line};
use tzlist::zones::{self, group_by_area, merge_with_catalog};
use tzlist::{Config, Log, city_from_os_tz};

fn main() {
    let parsed_args = ParsedArgs::from_env();

    let exit_code = match parsed_args.action {
        CliAction::ShowVersion => {
            args::display_version_info();
            EXIT_SUCCESS
        }
        CliAction::ShowHelp => {
            args::display_help();
            EXIT_SUCCESS
        }
        CliAction::ShowHelpDueToError => {
            args::display_help();
            EXIT_FAILURE
        }
        CliAction::City { tz } => match city_from_os_tz(&tz) {
            Ok(city) => {
                println!("{}", city);
                EXIT_SUCCESS
            }
            Err(e) => {
                Log::log_error(&format!("{:#}", e));
                EXIT_FAILURE
            }
        },
        CliAction::List {
            debug_enabled,
            grouped,
            times,
        } => match run_list(debug_enabled, grouped, times) {
            Ok(()) => EXIT_SUCCESS,
            Err(e) => {
                Log::log_pipe();
                Log::log_error(&format!("{:#}", e));
                Log::log_end();
                EXIT_FAILURE
            }
        },
    };

    std::process::exit(exit_code);
}

fn run_list(debug_enabled: bool, grouped: bool, times: bool) -> Result<()> {
    Log::log_version();

    let config = Config::load().context("Could not load configuration")?;

    if debug_enabled {
        Log::log_debug("Debug mode enabled");
        config.log_config();
    }

    let options = ListOptions::resolve(debug_enabled, grouped, times, &config);
    let now = Utc::now();

    let listed = merge_with_catalog(config.extra_zones());

    if options.debug_enabled {
        let extras = listed.len() - zones::common_timezones().len();
        Log::log_block_start(&format!(
            "{} zones ({} from the catalog, {} from config)",
            listed.len(),
            zones::common_timezones().len(),
            extras
        ));
    }

    if options.grouped {
        for (area, members) in group_by_area(listed.iter().copied()) {
            Log::log_block_start(area);
            for tz in members {
                Log::log_indented(&format_zone_line(tz, &options, now));
            }
        }
    } else {
        Log::log_pipe();
        for tz in &listed {
            Log::log_decorated(&format_zone_line(tz, &options, now));
        }
    }

    Log::log_end();
    Ok(())
}
