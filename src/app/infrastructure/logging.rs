use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "text_viewer=info";

/// Install the global `tracing` subscriber.
///
/// The filter comes from `RUST_LOG` when set, otherwise only this crate's
/// info-level events are printed. Safe to call more than once; later calls
/// are ignored.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
