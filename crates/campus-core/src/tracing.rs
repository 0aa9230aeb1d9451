use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the JSON log subscriber for a service binary.
///
/// Filtering follows `RUST_LOG` when set and falls back to `info`, so a
/// deployment with no env config still records request traces and
/// activity-append warnings. Repeated calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json())
        .try_init();
}
