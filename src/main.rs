use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use invdash::config::Config;
use invdash::inventory::{load_seed_file, seed_products, Filters, ProductStore};
use invdash::logging::init_tracing;
use invdash::ui::app::App;

/// Terminal inventory management dashboard.
#[derive(Debug, Parser)]
#[command(name = "invdash", version, about)]
struct Cli {
    /// Config file (default: ~/.config/invdash/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON array of products to start with instead of the built-in records.
    #[arg(long)]
    seed: Option<PathBuf>,

    /// Write diagnostic logs to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Rows per table page.
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    page_size: Option<u16>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading config")?;
    if let Some(page_size) = cli.page_size {
        config.dashboard.page_size = usize::from(page_size);
    }

    if let Some(log_file) = cli.log_file.as_ref().or(config.logging.file.as_ref()) {
        init_tracing(&config.logging.level, log_file)?;
    }

    let products = match &cli.seed {
        Some(path) => load_seed_file(path)?,
        None => seed_products(),
    };
    let store = ProductStore::new(
        products,
        Filters::new(config.dashboard.default_stock_filter),
    )
    .context("building product store")?;

    let app = App::new(store, config.dashboard);
    invdash::ui::run(app)?;
    Ok(())
}
