use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use newsdeck::cache::SnapshotCache;
use newsdeck::config::Config;
use newsdeck::data::CachingNewsRepository;
use newsdeck::remote::NewsApiClient;
use newsdeck::ui;
use newsdeck::ui::home::HomeStore;

#[derive(Parser)]
#[command(name = "newsdeck", about = "Terminal news reader with an offline snapshot fallback")]
struct Cli {
    /// Path to a config file (default: platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured country code.
    #[arg(long)]
    country: Option<String>,

    /// Override the configured page size.
    #[arg(long)]
    page_size: Option<u32>,

    /// Serve the cached snapshot without touching the network.
    #[arg(long, default_value_t = false)]
    offline: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(country) = cli.country {
        config.api.country = country;
    }
    if let Some(page_size) = cli.page_size {
        config.api.page_size = page_size;
    }
    config.validate()?;

    let api_key = config.resolve_api_key();
    if api_key.is_none() && !cli.offline {
        bail!(
            "no API key found; set {} or run with --offline",
            config.api.api_key_env
        );
    }

    let snapshot_path = config
        .cache
        .snapshot_path
        .clone()
        .unwrap_or_else(SnapshotCache::default_path);
    let cache = SnapshotCache::new(snapshot_path);

    let client = NewsApiClient::new(&config.api, api_key.as_deref().unwrap_or_default())
        .context("failed to build HTTP client")?;

    let repository = CachingNewsRepository::new(Box::new(client), Box::new(cache))
        .with_offline(cli.offline);

    // The store lives on the runtime; the render loop owns this thread.
    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    let _enter = runtime.enter();
    let store = HomeStore::spawn(Arc::new(repository));

    ui::run(store)?;
    Ok(())
}

/// Initialize tracing with optional file output.
///
/// Logging is off by default: the TUI owns the terminal, so log lines
/// would corrupt the display. Set `NEWSDECK_LOG` to a file path to
/// enable it; `RUST_LOG` controls the filter.
fn init_tracing() {
    let Some(log_path) = std::env::var("NEWSDECK_LOG").ok() else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&log_path) else {
        eprintln!("warning: failed to create log file: {}", log_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
