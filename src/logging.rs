use std::sync::Once;

use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "SUSPLAY_LOG";
const DEFAULT_FILTER: &str = "info";

static INIT: Once = Once::new();

/// Install the global fmt subscriber. Later calls are no-ops.
///
/// Filter comes from `SUSPLAY_LOG`, then `RUST_LOG`, then `info`. Output goes
/// to stderr so stdout stays reserved for session output.
pub fn init() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let installed = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
        if let Err(err) = installed {
            eprintln!("tracing subscriber already installed: {err}");
        }
    });
}
