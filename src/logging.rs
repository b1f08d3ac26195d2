use tracing_subscriber::EnvFilter;

/// Installs the stderr log subscriber. Level comes from `RUST_LOG`,
/// default `warn`, so stdout carries nothing but demo output.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
