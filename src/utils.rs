use tracing_subscriber::EnvFilter;

/// Installs the global trace subscriber.  The filter comes from `RUST_LOG`, and falls back on
/// info-level logs from `hoshi` alone.  Calling this twice is harmless; the second call loses.
pub fn trace_init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hoshi=info"));
    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_err()
    {
        tracing::trace!("Trace subscriber already installed.");
    }
}
