// src/main.rs - Desktop shell around the panel UI

use clap::Parser;

use sellerdesk::{logging, ui};

/// Command-line overrides take precedence over the config file and the
/// `SELLERDESK_*` environment; they are applied by exporting the matching
/// environment variables before the configuration is loaded.
#[derive(Parser, Debug)]
#[command(name = "sellerdesk", version, about = "Seller administration panel")]
struct Cli {
    /// Base URL of the REST API, e.g. https://api.shop.test/api/v1
    #[arg(long)]
    api_base: Option<String>,

    /// Initial interface language (overridden by the stored preference).
    #[arg(long)]
    language: Option<String>,

    /// Log filter, e.g. `debug` or `sellerdesk=trace` (defaults to RUST_LOG
    /// or `info`).
    #[arg(long)]
    log_level: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.log_level.as_deref());

    if let Some(api_base) = cli.api_base {
        std::env::set_var("SELLERDESK_API_BASE_URL", api_base);
    }
    if let Some(language) = cli.language {
        std::env::set_var("SELLERDESK_LANGUAGE", language);
    }

    tracing::info!(version = sellerdesk::VERSION, "starting sellerdesk");
    dioxus::launch(ui::App);
}
