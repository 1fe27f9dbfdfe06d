//! shiftdesk library root.
//! Exposes the CLI parser, the REST client, the view logic and the
//! high-level run() used by main.rs.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod session;
pub mod ui;
pub mod utils;

use api::ApiClient;
use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use session::Session;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};
use utils::path::expand_tilde;

/// Everything a command handler needs: the loaded configuration and the
/// API client carrying the session.
pub struct Context {
    pub cfg: Config,
    pub config_path: PathBuf,
    pub api: ApiClient,
}

impl Context {
    /// Resolve config, overrides and session the way `run` does.
    pub fn from_cli(cli: &Cli) -> AppResult<Self> {
        let config_path = cli
            .config
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(Config::config_file);

        let mut cfg = Config::load_from(&config_path)?;

        if let Some(url) = &cli.api_url {
            cfg.api_url = url.clone();
        }
        if let Some(file) = &cli.token_file {
            cfg.token_file = file.clone();
        }

        let session = Arc::new(Session::from_store(expand_tilde(&cfg.token_file))?);
        let api = ApiClient::new(&cfg.api_url, session)?;
        debug!(api = api.base_url(), config = %config_path.display(), "context ready");

        Ok(Self {
            cfg,
            config_path,
            api,
        })
    }
}

/// Central command dispatcher
pub async fn dispatch(cli: &Cli, ctx: &Context) -> AppResult<()> {
    match &cli.command {
        Commands::Dashboard => cli::commands::dashboard::handle(ctx).await,
        Commands::Workers { action } => cli::commands::workers::handle(action, ctx).await,
        Commands::Shifts { action } => cli::commands::shifts::handle(action, ctx).await,
        Commands::Track { action } => cli::commands::track::handle(action, ctx).await,
        Commands::Reports { action } => cli::commands::reports::handle(action, ctx).await,
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, ctx).await,
        Commands::Auth { action } => cli::commands::auth::handle(action, ctx),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, ctx),
    }
}

/// Logs go to stderr so view output on stdout stays clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Entry point used by main.rs
pub async fn run() -> AppResult<()> {
    let cli = Cli::parse();

    init_tracing();

    let ctx = Context::from_cli(&cli)?;

    dispatch(&cli, &ctx).await
}
