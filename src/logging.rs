//! Logging setup for the command-line front end

use env_logger::Env;
use log::LevelFilter;

/// Environment variable holding the log filter (e.g. `debug`, `manifest=info`)
pub const LOG_ENV: &str = "MANIFEST_LOG";

/// Install the stderr logger.
///
/// The filter comes from `MANIFEST_LOG` and defaults to `warn`; `verbose`
/// forces `debug`. Calling this more than once keeps the first logger.
pub fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_env(Env::default().filter_or(LOG_ENV, "warn"));
    builder.format_timestamp(None);
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    let _ = builder.try_init();
}
