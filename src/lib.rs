// src/lib.rs - SellerDesk crate root

//! SellerDesk is a seller-facing administration panel for an e-commerce
//! marketplace: products with variants and images, orders, inventory,
//! customers, promotions, coupons, team management, and the company
//! profile, all over a remote REST API.
//!
//! The same crate builds for two targets. On wasm32 it is the browser
//! client, started through [`start`]. On native targets the
//! `sellerdesk_desktop` binary (feature `desktop`) wraps the identical UI
//! in a desktop window.

pub mod api;
pub mod config;
pub mod error;
pub mod forms;
pub mod logging;
pub mod models;
pub mod platform;
pub mod query;
pub mod session;
pub mod ui;
pub mod utils;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::wasm_bindgen;

/// Browser entry point, invoked by the generated JS glue on module load.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    logging::init_wasm();
    tracing::info!(version = VERSION, "starting sellerdesk");
    dioxus::launch(ui::App);
}
