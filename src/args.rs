//! Command-line argument parsing and processing.
//!
//! vaktijar takes a handful of flags plus exactly one positional action:
//! `print`, a single digit `0`–`5` addressing one prayer slot directly,
//! `next`, or `current`. Flags that change what would be fetched
//! (`--directory`, `--location`, `--date`) force a refetch, matching the
//! behavior of the original utility.

use std::path::PathBuf;

use crate::logger::Log;

/// The positional action requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VakatAction {
    /// Print the whole day's schedule (or the raw JSON with `--raw`).
    Print,
    /// Print a single prayer slot by index 0..=5.
    Slot(usize),
    /// Print the next prayer slot relative to the current time.
    Next,
    /// Print the prayer slot the current time falls within.
    Current,
}

/// Flags and action for a normal run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub action: VakatAction,
    pub force_update: bool,
    pub raw_output: bool,
    pub cache_dir: Option<PathBuf>,
    pub location: Option<String>,
    pub date: Option<String>,
}

/// What the parsed command line asks the program to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    /// Run the fetch/cache/query pipeline with these settings.
    Run(RunOptions),
    /// Display help information and exit.
    ShowHelp,
    /// Display version information and exit.
    ShowVersion,
    /// Show help due to bad arguments and exit nonzero.
    ShowHelpDueToError,
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

impl ParsedArgs {
    /// Parse command-line arguments into a structured result.
    ///
    /// Flags may appear in any order around the positional action. Any
    /// unknown option, missing flag value, malformed date, or missing or
    /// unknown action yields `ShowHelpDueToError`.
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut display_help = false;
        let mut display_version = false;
        let mut force_update = false;
        let mut raw_output = false;
        let mut cache_dir: Option<PathBuf> = None;
        let mut location: Option<String> = None;
        let mut date: Option<String> = None;
        let mut action: Option<VakatAction> = None;
        let mut bad_args = false;

        let args_vec: Vec<String> = args
            .into_iter()
            .skip(1)
            .map(|s| s.as_ref().to_string())
            .collect();

        let mut i = 0;
        while i < args_vec.len() {
            let arg = &args_vec[i];
            match arg.as_str() {
                "--help" | "-h" => display_help = true,
                "--version" | "-V" => display_version = true,
                "--update" | "-u" => force_update = true,
                "--raw" | "-r" => raw_output = true,
                "--directory" | "-d" => match args_vec.get(i + 1) {
                    Some(value) => {
                        cache_dir = Some(PathBuf::from(value));
                        // Pointing at a different cache means its content
                        // cannot be trusted for today.
                        force_update = true;
                        i += 1;
                    }
                    None => {
                        Log::log_warning("Missing value for --directory");
                        bad_args = true;
                    }
                },
                "--location" | "-l" => match args_vec.get(i + 1) {
                    Some(value) => {
                        location = Some(value.clone());
                        force_update = true;
                        i += 1;
                    }
                    None => {
                        Log::log_warning("Missing value for --location");
                        bad_args = true;
                    }
                },
                "--date" | "-y" => match args_vec.get(i + 1) {
                    Some(value) => {
                        if validate_date(value) {
                            date = Some(value.clone());
                            force_update = true;
                        } else {
                            Log::log_warning(&format!(
                                "Invalid date {value:?}: expected yyyy[/mm[/dd]]"
                            ));
                            bad_args = true;
                        }
                        i += 1;
                    }
                    None => {
                        Log::log_warning("Missing value for --date");
                        bad_args = true;
                    }
                },
                _ => {
                    if arg.starts_with('-') {
                        Log::log_warning(&format!("Unknown option: {}", arg));
                        bad_args = true;
                    } else if action.is_some() {
                        Log::log_warning(&format!("Unexpected extra action: {}", arg));
                        bad_args = true;
                    } else {
                        match parse_action(arg) {
                            Some(parsed) => action = Some(parsed),
                            None => {
                                Log::log_warning(&format!("Unknown action: {}", arg));
                                bad_args = true;
                            }
                        }
                    }
                }
            }
            i += 1;
        }

        let action = if display_version {
            CliAction::ShowVersion
        } else if display_help {
            CliAction::ShowHelp
        } else if bad_args {
            CliAction::ShowHelpDueToError
        } else {
            match action {
                Some(action) => CliAction::Run(RunOptions {
                    action,
                    force_update,
                    raw_output,
                    cache_dir,
                    location,
                    date,
                }),
                None => {
                    Log::log_warning("No action specified");
                    CliAction::ShowHelpDueToError
                }
            }
        };

        ParsedArgs { action }
    }

    /// Convenience method to parse from std::env::args().
    pub fn from_env() -> ParsedArgs {
        Self::parse(std::env::args())
    }
}

/// Parse the positional action word.
fn parse_action(arg: &str) -> Option<VakatAction> {
    match arg {
        "print" => Some(VakatAction::Print),
        "next" => Some(VakatAction::Next),
        "current" => Some(VakatAction::Current),
        _ => {
            let mut chars = arg.chars();
            match (chars.next(), chars.next()) {
                (Some(c @ '0'..='5'), None) => {
                    Some(VakatAction::Slot(c as usize - '0' as usize))
                }
                _ => None,
            }
        }
    }
}

/// Check the target-date shape `yyyy[/mm[/dd]]`: 4, 7 or 10 characters,
/// slashes at positions 4 and 7, digits everywhere else. Calendar
/// plausibility is the API's business.
pub fn validate_date(date: &str) -> bool {
    if !matches!(date.len(), 4 | 7 | 10) {
        return false;
    }

    date.char_indices().all(|(i, c)| match i {
        4 | 7 => c == '/',
        _ => c.is_ascii_digit(),
    })
}

/// Displays version information using the logger's framing.
pub fn display_version_info() {
    Log::log_version();
    Log::log_pipe();
    println!("┗ {}", env!("CARGO_PKG_DESCRIPTION"));
}

/// Displays the usage message.
pub fn display_help() {
    Log::log_version();
    Log::log_block_start(env!("CARGO_PKG_DESCRIPTION"));
    Log::log_block_start("Usage: vaktijar [OPTIONS] <ACTION>");
    Log::log_block_start("Options:");
    Log::log_indented("-d, --directory <dir>  Cache directory to download into / read from");
    Log::log_indented("-h, --help             Print help information");
    Log::log_indented("-l, --location <id>    Location id for the API (77 = Sarajevo)");
    Log::log_indented("-r, --raw              Output raw data only, for piping");
    Log::log_indented("-u, --update           Force a refetch of the vaktija data");
    Log::log_indented("-V, --version          Print version information");
    Log::log_indented("-y, --date <date>      Target date, yyyy[/mm[/dd]]");
    Log::log_block_start("Actions:");
    Log::log_indented("print                  Print the whole vaktija");
    Log::log_indented("0..5                   Print the given prayer slot");
    Log::log_indented("next                   Print the next prayer slot");
    Log::log_indented("current                Print the current prayer slot");
    Log::log_block_start("Examples:");
    Log::log_indented("vaktijar -r -d /tmp/altcache -y 2020/04/01 -l 82 print");
    Log::log_indented("vaktijar -u 3");
    Log::log_end();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_options(args: Vec<&str>) -> RunOptions {
        match ParsedArgs::parse(args).action {
            CliAction::Run(opts) => opts,
            other => panic!("expected a run, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_print_action() {
        let opts = run_options(vec!["vaktijar", "print"]);
        assert_eq!(opts.action, VakatAction::Print);
        assert!(!opts.force_update);
        assert!(!opts.raw_output);
    }

    #[test]
    fn test_parse_next_and_current() {
        assert_eq!(run_options(vec!["vaktijar", "next"]).action, VakatAction::Next);
        assert_eq!(
            run_options(vec!["vaktijar", "current"]).action,
            VakatAction::Current
        );
    }

    #[test]
    fn test_parse_slot_digits() {
        assert_eq!(run_options(vec!["vaktijar", "0"]).action, VakatAction::Slot(0));
        assert_eq!(run_options(vec!["vaktijar", "5"]).action, VakatAction::Slot(5));
    }

    #[test]
    fn test_parse_slot_out_of_range() {
        let parsed = ParsedArgs::parse(vec!["vaktijar", "7"]);
        assert_eq!(parsed.action, CliAction::ShowHelpDueToError);
    }

    #[test]
    fn test_parse_no_action() {
        let parsed = ParsedArgs::parse(vec!["vaktijar"]);
        assert_eq!(parsed.action, CliAction::ShowHelpDueToError);

        let parsed = ParsedArgs::parse(vec!["vaktijar", "--update"]);
        assert_eq!(parsed.action, CliAction::ShowHelpDueToError);
    }

    #[test]
    fn test_parse_unknown_action() {
        let parsed = ParsedArgs::parse(vec!["vaktijar", "tomorrow"]);
        assert_eq!(parsed.action, CliAction::ShowHelpDueToError);
    }

    #[test]
    fn test_parse_extra_action() {
        let parsed = ParsedArgs::parse(vec!["vaktijar", "print", "next"]);
        assert_eq!(parsed.action, CliAction::ShowHelpDueToError);
    }

    #[test]
    fn test_parse_update_flag() {
        let opts = run_options(vec!["vaktijar", "-u", "next"]);
        assert!(opts.force_update);
    }

    #[test]
    fn test_parse_raw_flag() {
        let opts = run_options(vec!["vaktijar", "--raw", "print"]);
        assert!(opts.raw_output);
    }

    #[test]
    fn test_directory_implies_update() {
        let opts = run_options(vec!["vaktijar", "-d", "/tmp/altcache", "print"]);
        assert_eq!(opts.cache_dir, Some(PathBuf::from("/tmp/altcache")));
        assert!(opts.force_update);
    }

    #[test]
    fn test_location_implies_update() {
        let opts = run_options(vec!["vaktijar", "--location", "82", "print"]);
        assert_eq!(opts.location.as_deref(), Some("82"));
        assert!(opts.force_update);
    }

    #[test]
    fn test_date_implies_update() {
        let opts = run_options(vec!["vaktijar", "-y", "2020/04/01", "print"]);
        assert_eq!(opts.date.as_deref(), Some("2020/04/01"));
        assert!(opts.force_update);
    }

    #[test]
    fn test_missing_flag_value() {
        let parsed = ParsedArgs::parse(vec!["vaktijar", "print", "--location"]);
        assert_eq!(parsed.action, CliAction::ShowHelpDueToError);
    }

    #[test]
    fn test_invalid_date_rejected() {
        let parsed = ParsedArgs::parse(vec!["vaktijar", "-y", "2020-04-01", "print"]);
        assert_eq!(parsed.action, CliAction::ShowHelpDueToError);
    }

    #[test]
    fn test_flags_after_action() {
        let opts = run_options(vec!["vaktijar", "print", "-r"]);
        assert_eq!(opts.action, VakatAction::Print);
        assert!(opts.raw_output);
    }

    #[test]
    fn test_parse_help_flag() {
        assert_eq!(
            ParsedArgs::parse(vec!["vaktijar", "--help"]).action,
            CliAction::ShowHelp
        );
        assert_eq!(
            ParsedArgs::parse(vec!["vaktijar", "-h"]).action,
            CliAction::ShowHelp
        );
    }

    #[test]
    fn test_parse_version_flag() {
        assert_eq!(
            ParsedArgs::parse(vec!["vaktijar", "--version"]).action,
            CliAction::ShowVersion
        );
    }

    #[test]
    fn test_version_takes_precedence() {
        let parsed = ParsedArgs::parse(vec!["vaktijar", "--version", "--help", "print"]);
        assert_eq!(parsed.action, CliAction::ShowVersion);
    }

    #[test]
    fn test_help_beats_bad_args() {
        let parsed = ParsedArgs::parse(vec!["vaktijar", "--help", "--bogus"]);
        assert_eq!(parsed.action, CliAction::ShowHelp);
    }

    #[test]
    fn test_unknown_option() {
        let parsed = ParsedArgs::parse(vec!["vaktijar", "--bogus", "print"]);
        assert_eq!(parsed.action, CliAction::ShowHelpDueToError);
    }

    #[test]
    fn test_validate_date_shapes() {
        assert!(validate_date("2020"));
        assert!(validate_date("2020/04"));
        assert!(validate_date("2020/04/01"));

        assert!(!validate_date(""));
        assert!(!validate_date("20"));
        assert!(!validate_date("2020/4"));
        assert!(!validate_date("2020/04/1"));
        assert!(!validate_date("2020-04-01"));
        assert!(!validate_date("2020/04/01/"));
        assert!(!validate_date("yyyy/mm/dd"));
    }
}
