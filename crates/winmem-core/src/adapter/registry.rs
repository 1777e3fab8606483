//! Adapter selection from configuration.

use tracing::info;
use winmem_config::{AdapterVariant, WinMemConfig};

use super::backends::{DirectAdapter, FallbackAdapter, OffsetAdapter};
use super::traits::GeometryAdapter;

/// Build the adapter for `variant`, resolving `Auto` against the build target.
///
/// Adapters hold per-process state, so each call returns a fresh instance.
pub fn create_adapter(variant: AdapterVariant, config: &WinMemConfig) -> Box<dyn GeometryAdapter> {
    let resolved = variant.resolve();
    info!(
        event = "core.adapter.selected",
        requested = variant.as_str(),
        resolved = resolved.as_str()
    );

    match resolved {
        AdapterVariant::Offset => Box::new(OffsetAdapter::new()),
        AdapterVariant::Fallback => {
            Box::new(FallbackAdapter::from_config(&config.probe, &config.drift))
        }
        AdapterVariant::Direct | AdapterVariant::Auto => Box::new(DirectAdapter::new()),
    }
}

/// Build the adapter named in `config.adapter.variant`.
pub fn adapter_for(config: &WinMemConfig) -> Box<dyn GeometryAdapter> {
    create_adapter(config.adapter.variant, config)
}
