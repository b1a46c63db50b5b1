use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `SRB_LOG=srb_core=debug`.
pub const LOG_ENV: &str = "SRB_LOG";

static INIT: Once = Once::new();

/// Install a stderr subscriber. Debug events from `srb-core` are only
/// compiled in with the `trace` feature.
pub fn init_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_env_filter(filter)
            .init();
    });
}
