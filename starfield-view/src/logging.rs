//! Tracing subscriber setup for the star field binary.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither `RUST_LOG` nor the config provide one.
pub const DEFAULT_FILTER: &str = "info,eframe=warn,egui_glow=warn,wgpu=warn,naga=warn";

/// Picks the filter string: the configured level, or [`DEFAULT_FILTER`]
/// when the configured level is empty.
pub fn filter_string(configured: &str) -> String {
    if configured.trim().is_empty() {
        DEFAULT_FILTER.to_string()
    } else {
        configured.to_string()
    }
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `configured`. Output goes to the
/// console with module paths and time since start.
pub fn init_logging(configured: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_string(configured)));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}
