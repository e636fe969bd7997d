use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::epicor::users::error::{Result, SyncError};

/// Default filter directive for a verbosity level given on the command line.
pub fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        2 => "trace",
        _ => "trace,reqwest=debug,hyper=debug",
    }
}

/// Installs the global fmt subscriber writing to stderr. `RUST_LOG` takes
/// precedence over the verbosity flag when set.
pub fn init_logging(verbose: u8) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .with_line_number(verbose >= 3)
        .try_init()
        .map_err(|error| SyncError::Logging(error.to_string()))?;

    debug!(verbose, "logging initialised");
    Ok(())
}
