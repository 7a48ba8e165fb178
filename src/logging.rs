// src/logging.rs - Tracing initialization per target

//! Structured logging setup.
//!
//! Native builds log to stderr through `tracing-subscriber` with an
//! `EnvFilter` (`RUST_LOG` or an explicit level from the CLI). The wasm
//! build is initialized from `lib.rs` with `tracing-wasm`, which forwards
//! spans and events to the browser console.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the native tracing subscriber. `level` overrides `RUST_LOG`
/// when present.
#[cfg(not(target_arch = "wasm32"))]
pub fn init(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();

    tracing::debug!("tracing initialized");
}

/// Initializes console tracing for the wasm build.
#[cfg(target_arch = "wasm32")]
pub fn init_wasm() {
    console_error_panic_hook::set_once();

    if let Err(e) = tracing_wasm::try_set_as_global_default() {
        web_sys::console::error_1(&format!("Failed to set up tracing: {:?}", e).into());
    }
}
