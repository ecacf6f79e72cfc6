//! Logging infrastructure for the kiln CLI.
//!
//! Log events go to stderr through `tracing-subscriber`, so `--json` output
//! on stdout stays machine readable.
//!
//! # Example
//!
//! ```rust,no_run
//! use kiln_cli::logger::{init_logger, LogOptions};
//!
//! init_logger(LogOptions {
//!     verbose: true,
//!     ..LogOptions::default()
//! });
//!
//! tracing::debug!("resolving descriptor");
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const CRATES: [&str; 3] = ["kiln_cli", "kiln_config", "kiln_plan"];

/// Inputs that decide the log filter.
#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    pub verbose: bool,
    pub quiet: bool,
    pub no_color: bool,

    /// `settings.log_level` from the descriptor
    pub level: Option<String>,
}

impl LogOptions {
    /// Whether the filter is decided without the descriptor's
    /// `settings.log_level`.
    pub fn level_is_fixed(&self) -> bool {
        self.verbose || self.quiet || EnvFilter::try_from_default_env().is_ok()
    }
}

/// Build the filter for `options`.
///
/// The level is determined in this order:
/// 1. `--verbose`: debug for kiln crates
/// 2. `--quiet`: errors only
/// 3. `RUST_LOG`
/// 4. `settings.log_level` from the descriptor
/// 5. info
pub fn build_filter(options: &LogOptions) -> EnvFilter {
    if options.verbose {
        return EnvFilter::new(directives("debug"));
    }
    if options.quiet {
        return EnvFilter::new(directives("error"));
    }

    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = options.level.as_deref().unwrap_or("info");
        EnvFilter::try_new(directives(level)).unwrap_or_else(|_| EnvFilter::new(directives("info")))
    })
}

fn directives(level: &str) -> String {
    CRATES
        .iter()
        .map(|krate| format!("{}={}", krate, level))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install the global subscriber.
///
/// The first call wins and later calls are ignored. Commands install it
/// before loading when [`LogOptions::level_is_fixed`], otherwise right after
/// the descriptor is loaded so `settings.log_level` can take effect. Events
/// emitted while loading are dropped in the second case.
pub fn init_logger(options: LogOptions) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!options.no_color && should_use_colors())
        .compact();

    let _ = tracing_subscriber::registry()
        .with(build_filter(&options))
        .with(fmt_layer)
        .try_init();
}

/// Check if colored log output should be enabled.
///
/// `NO_COLOR` disables colors, `FORCE_COLOR` forces them, otherwise the
/// terminal is asked.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::Term::stderr().features().colors_supported()
}
