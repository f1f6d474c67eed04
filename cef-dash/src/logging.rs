//! Tracing subscriber setup
//!
//! The subscriber is installed before configuration is read so config
//! warnings are visible. The level from the TOML file is applied afterwards
//! through a reload handle. `RUST_LOG` always wins when set.

use tracing::warn;
use tracing_subscriber::{
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    reload,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Handle for changing the level after startup
pub type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Filter enabling `level` for this service and its libraries
pub fn filter_for_level(level: &str) -> EnvFilter {
    EnvFilter::new(format!(
        "cef_dash={level},cef_common={level},tower_http={level}"
    ))
}

/// Install the global subscriber writing to stdout
pub fn init_logging(level: &str) -> Option<FilterHandle> {
    init_logging_with_writer(level, std::io::stdout)
}

/// Install the global subscriber with a custom writer
///
/// Returns `None` when `RUST_LOG` fixes the filter.
pub fn init_logging_with_writer<W>(level: &str, writer: W) -> Option<FilterHandle>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    match EnvFilter::try_from_default_env() {
        Ok(filter) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(writer))
                .init();
            None
        }
        Err(_) => {
            let (filter, handle) = reload::Layer::new(filter_for_level(level));
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(writer))
                .init();
            Some(handle)
        }
    }
}

/// Switch to the resolved level once configuration is loaded
pub fn apply_level(handle: Option<&FilterHandle>, level: &str) {
    if let Some(handle) = handle {
        if let Err(e) = handle.reload(filter_for_level(level)) {
            warn!("Failed to apply log level {}: {}", level, e);
        }
    }
}
