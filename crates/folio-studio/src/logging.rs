//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber
///
/// `RUST_LOG` wins over `fallback_filter`. A second call is a no-op.
pub fn init_tracing(fallback_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_filter));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if let Err(error) = installed {
        tracing::debug!(error = %error, "tracing subscriber already initialized");
    }
}
