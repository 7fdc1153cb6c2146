use tracing_subscriber::EnvFilter;

/// Initializes logging. Call once at startup.
///
/// Level: INFO by default, DEBUG in development mode, either overridden by
/// the RUST_LOG env var.
pub fn init(dev_mode: bool) {
    let default_directive = if dev_mode { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
