use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

use lifedash::app::{App, AppEvent};
use lifedash::config::Config;
use lifedash::remote::RemoteClient;
use lifedash::ui;

/// Get the config directory path (~/.config/lifedash/)
fn get_config_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home).join(".config").join("lifedash"))
}

#[derive(Parser, Debug)]
#[command(
    name = "lifedash",
    about = "Terminal dashboard for food, subscriptions, and academic deadlines"
)]
struct Args {
    /// Session token identifying your data on the remote store
    #[arg(long)]
    token: Option<String>,

    /// Run against built-in fixtures without a remote store
    #[arg(long)]
    local: bool,

    /// Override the remote store base URL from the config file
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing for debug logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let config_path = get_config_dir()?.join("config.toml");
    let mut config = Config::load(&config_path).context("Failed to load configuration")?;
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }

    // Resolve the session mode. A token starts a remote session unless
    // --local is passed; a missing token falls back to local mode only when
    // configured to, otherwise it is a startup error.
    let (token, remote) = if args.local {
        (args.token.unwrap_or_else(|| "local".to_string()), None)
    } else if let Some(token) = args.token {
        let client = RemoteClient::new(
            &config.base_url,
            Duration::from_secs(config.request_timeout_secs),
        )
        .context("Failed to build remote client")?;
        (token, Some(Arc::new(client)))
    } else if config.local_fallback {
        ("local".to_string(), None)
    } else {
        eprintln!("Error: a --token is required for a remote session.");
        eprintln!();
        eprintln!("Usage: lifedash --token <TOKEN>");
        eprintln!("   or: lifedash --local          (built-in fixtures, no remote)");
        std::process::exit(1);
    };

    let mut app = App::new(token, remote);

    // Create event channel for background tasks
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>(32);

    if app.remote.is_some() {
        app.set_status("Fetching data...");
        ui::spawn_fetch_categories(&app, &event_tx);
    } else {
        app.load_fixtures();
        app.set_status("Running locally: changes stay on this machine.");
        tracing::info!(token = %app.token, "Running in local mode");
    }

    ui::run(&mut app, event_tx, event_rx).await?;

    println!("Goodbye!");
    Ok(())
}
