use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

/// Initialise the global tracing subscriber. `RUST_LOG` wins when set;
/// otherwise the supplied level is used for the whole crate.
pub fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .compact()
        .init();
}
