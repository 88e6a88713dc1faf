use std::path::PathBuf;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use purchase_tracker::cli;
use purchase_tracker::domain::store::PurchaseStore;
use purchase_tracker::storage::JsonPurchaseRepository;

/// Data file location: first CLI argument, else `PURCHASES_FILE`, else
/// `purchases.json` in the working directory.
fn data_file_path() -> PathBuf {
    std::env::args()
        .nth(1)
        .or_else(|| std::env::var("PURCHASES_FILE").ok())
        .unwrap_or_else(|| "purchases.json".to_string())
        .into()
}

fn main() -> anyhow::Result<()> {
    // Logging is opt-in via RUST_LOG so it stays out of the menu UI.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let path = data_file_path();
    info!("using data file {}", path.display());

    let repository = JsonPurchaseRepository::new(&path);
    // A corrupt data file aborts here with a non-zero exit rather than
    // silently starting over an existing file.
    let mut store = PurchaseStore::load(repository)
        .with_context(|| format!("failed to load purchase data from {}", path.display()))?;

    cli::run(&mut store)
}
