//! DocDesk — terminal browser for the back-office document service.
//!
//! Wires configuration, logging, and the HTTP document service into a
//! browser session, then hands control to the interactive shell.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use docdesk_browser::BrowserSession;
use docdesk_client::HttpDocumentService;
use docdesk_core::config::AppConfig;
use docdesk_core::error::AppError;
use docdesk_entity::view::ViewMode;

mod shell;

/// Browse the back-office document tree from the terminal.
#[derive(Debug, Parser)]
#[command(name = "docdesk", version, about, long_about = None)]
struct Cli {
    /// Configuration environment overlay (config/<env>.toml)
    #[arg(short, long, default_value = "development")]
    env: String,

    /// Override the document service base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Initial view partition: all, public, or private
    #[arg(long, default_value = "all")]
    view: String,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_configuration(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(&cli, config).await {
        tracing::error!("Browser error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration and apply command-line overrides.
fn load_configuration(cli: &Cli) -> Result<AppConfig, AppError> {
    let mut config = AppConfig::load(&cli.env)?;
    if let Some(base_url) = &cli.base_url {
        config.service.base_url = base_url.clone();
    }
    Ok(config)
}

/// Initialize the tracing subscriber from config.
///
/// Logs go to stderr so they interleave with the shell rather than with
/// its table output.
fn init_logging(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if config.logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn run(cli: &Cli, config: AppConfig) -> Result<(), AppError> {
    let view: ViewMode = cli.view.parse()?;
    let service = Arc::new(HttpDocumentService::new(&config.service)?);
    let session = BrowserSession::connect(service, config.upload.clone(), view).await?;
    shell::run(session).await
}
