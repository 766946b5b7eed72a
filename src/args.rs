//! Command-line argument parsing.
//!
//! Supports the standard help, version and debug flags plus the listing
//! options. Unknown options are reported and turn into a help screen.
//! Arguments are read as OS strings so a non-UTF-8 `--city` value reaches
//! the caller instead of aborting the parse.

use std::ffi::{OsStr, OsString};

use crate::logger::Log;

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// List the known zones
    List {
        debug_enabled: bool,
        grouped: bool,
        times: bool,
    },
    /// Print the display name of a single zone
    City { tz: OsString },
    /// Display help information and exit
    ShowHelp,
    /// Display version information and exit
    ShowVersion,
    /// Show help due to invalid arguments and exit
    ShowHelpDueToError,
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

fn is_option(arg: &OsStr) -> bool {
    arg.to_string_lossy().starts_with('-')
}

impl ParsedArgs {
    /// Parse command-line arguments into a structured result.
    ///
    /// # Arguments
    /// * `args` - Iterator over command-line arguments including the program name
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut debug_enabled = false;
        let mut display_help = false;
        let mut display_version = false;
        let mut grouped = false;
        let mut times = false;
        let mut city_tz: Option<OsString> = None;
        let mut invalid_arg_found = false;

        let args_vec: Vec<OsString> = args
            .into_iter()
            .skip(1)
            .map(|s| s.as_ref().to_os_string())
            .collect();

        let mut i = 0;
        while i < args_vec.len() {
            let arg = args_vec[i].as_os_str();
            match arg.to_str() {
                Some("--help" | "-h") => display_help = true,
                Some("--version" | "-V" | "-v") => display_version = true,
                Some("--debug" | "-d") => debug_enabled = true,
                Some("--grouped" | "-g") => grouped = true,
                Some("--times" | "-t") => times = true,
                Some("--city" | "-c") => match args_vec.get(i + 1) {
                    Some(tz) if !is_option(tz) => {
                        city_tz = Some(tz.clone());
                        i += 1;
                    }
                    _ => {
                        Log::log_warning("Missing argument for --city. Usage: --city <TZ>");
                        invalid_arg_found = true;
                    }
                },
                _ => {
                    if is_option(arg) {
                        Log::log_warning(&format!("Unknown option: {}", arg.to_string_lossy()));
                    } else {
                        Log::log_warning(&format!(
                            "Unexpected argument: {}",
                            arg.to_string_lossy()
                        ));
                    }
                    invalid_arg_found = true;
                }
            }
            i += 1;
        }

        let action = if display_version {
            CliAction::ShowVersion
        } else if invalid_arg_found {
            CliAction::ShowHelpDueToError
        } else if display_help {
            CliAction::ShowHelp
        } else if let Some(tz) = city_tz {
            CliAction::City { tz }
        } else {
            CliAction::List {
                debug_enabled,
                grouped,
                times,
            }
        };

        ParsedArgs { action }
    }

    /// Convenience method to parse from std::env::args_os()
    pub fn from_env() -> ParsedArgs {
        Self::parse(std::env::args_os())
    }
}

/// Displays version information using the logging style.
pub fn display_version_info() {
    Log::log_version();
    println!("┗ {}", env!("CARGO_PKG_DESCRIPTION"));
}

/// Displays the help message using logger methods.
pub fn display_help() {
    Log::log_version();
    Log::log_block_start(env!("CARGO_PKG_DESCRIPTION"));
    Log::log_block_start("Usage: tzlist [OPTIONS]");
    Log::log_block_start("Options:");
    Log::log_indented("-c, --city <TZ>   Print the city name for a time zone");
    Log::log_indented("-d, --debug       Enable detailed debug output");
    Log::log_indented("-g, --grouped     Group zones by area");
    Log::log_indented("-h, --help        Print help information");
    Log::log_indented("-t, --times       Show the current time in each zone");
    Log::log_indented("-V, --version     Print version information");
    Log::log_end();
}
