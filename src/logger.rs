//! Structured terminal output with box-drawing framing.
//!
//! All non-raw output goes through [`Log`], which frames a run between a
//! version header and a closing marker and prefixes warnings and errors.
//! Output can be switched off globally for `--raw` mode, where anything
//! beyond the requested data would get in the way of piping.

use std::sync::atomic::{AtomicBool, Ordering};

static LOGGING_ENABLED: AtomicBool = AtomicBool::new(true);

/// Logging facade. All methods are no-ops while logging is disabled.
pub struct Log;

impl Log {
    /// Globally enable or disable output. Raw mode disables it so the
    /// requested value is the only thing written to stdout.
    pub fn set_enabled(enabled: bool) {
        LOGGING_ENABLED.store(enabled, Ordering::SeqCst);
    }

    pub fn is_enabled() -> bool {
        LOGGING_ENABLED.load(Ordering::SeqCst)
    }

    /// Opening header with the program version.
    pub fn log_version() {
        if !Self::is_enabled() {
            return;
        }
        println!("┏ vaktijar v{} ━━╸", env!("CARGO_PKG_VERSION"));
        println!("┃");
    }

    /// A main status line with a branching indicator.
    pub fn log_decorated(message: &str) {
        if !Self::is_enabled() {
            return;
        }
        println!("┣ {}", message);
    }

    /// A secondary, indented detail line.
    pub fn log_indented(message: &str) {
        if !Self::is_enabled() {
            return;
        }
        println!("┃   {}", message);
    }

    /// A bare pipe for visual spacing.
    pub fn log_pipe() {
        if !Self::is_enabled() {
            return;
        }
        println!("┃");
    }

    /// A status line preceded by visual spacing, for a new phase of
    /// output.
    pub fn log_block_start(message: &str) {
        if !Self::is_enabled() {
            return;
        }
        println!("┃");
        println!("┣ {}", message);
    }

    /// Closing marker at the end of a run.
    pub fn log_end() {
        if !Self::is_enabled() {
            return;
        }
        println!("╹");
    }

    /// Non-fatal problem worth flagging.
    pub fn log_warning(message: &str) {
        if !Self::is_enabled() {
            return;
        }
        println!("┣ [WARN] {}", message);
    }

    /// Fatal problem; the caller decides the exit.
    pub fn log_error(message: &str) {
        if !Self::is_enabled() {
            return;
        }
        println!("┣ [ERR] {}", message);
    }
}
