//! Logging setup.
//!
//! Diagnostics (per-model progress, skipped objects, run summaries) go to
//! stderr through the `log` facade so the document on disk and the console
//! summary stay separate.
//!
//! ```no_run
//! use axdoc::logging::{self, Verbosity};
//!
//! logging::init(Verbosity::Normal);
//! log::info!("App started");
//! ```

use log::LevelFilter;

/// Console verbosity chosen on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Warnings and errors only
    Quiet,
    /// Run progress
    #[default]
    Normal,
    /// Per-model and per-object detail
    Verbose,
}

impl Verbosity {
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        match (verbose, quiet) {
            (true, _) => Self::Verbose,
            (false, true) => Self::Quiet,
            (false, false) => Self::Normal,
        }
    }

    pub fn level(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::Warn,
            Self::Normal => LevelFilter::Info,
            Self::Verbose => LevelFilter::Debug,
        }
    }
}

/// Initialize the global logger.
///
/// `RUST_LOG` overrides the level derived from `verbosity`. Calling this more
/// than once is harmless; later calls are ignored.
pub fn init(verbosity: Verbosity) {
    let result = env_logger::Builder::new()
        .filter_level(verbosity.level())
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .try_init();

    if result.is_ok() {
        log::debug!("Logging initialized at {:?}", verbosity.level());
    }
}
