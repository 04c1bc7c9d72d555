use tracing_subscriber::EnvFilter;

/// Installs a formatted `tracing` subscriber for host programs and tests.
///
/// `RUST_LOG` takes precedence over `default_directive`. Returns false when a
/// global subscriber was already installed.
pub fn init(default_directive: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok()
}
