//! Global `tracing` subscriber setup.

/// Install the global `tracing` subscriber for native hosts.
///
/// Honors `RUST_LOG`, defaulting to `info`. Safe to call more than once; later
/// calls are no-ops.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();
}

/// Install the global `tracing` subscriber in the browser.
///
/// Events at `info` and above go to the developer console, so `warn!` lands
/// in `console.warn` and `error!` in `console.error`.
#[cfg(target_arch = "wasm32")]
pub fn init_tracing() {
    use tracing_subscriber::prelude::*;

    let config = tracing_wasm::WASMLayerConfigBuilder::new()
        .set_max_level(tracing::Level::INFO)
        .build();
    let _ = tracing_subscriber::registry()
        .with(tracing_wasm::WASMLayer::new(config))
        .try_init();
}
