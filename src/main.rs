//! catalog-admin - product catalog admin CLI
//!
#![doc = "Main entry point for the catalog-admin application."]

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use catalog_admin::cli::{Cli, Commands};
use catalog_admin::commands;
use catalog_admin::config::Config;
use catalog_admin::context::AppContext;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse_args();

    init_tracing(cli.verbose);

    // Load configuration
    let config_path = cli.config.as_deref().unwrap_or("config/config.yaml");
    let config = Config::load(config_path, &cli)?;

    // Validate configuration
    config.validate()?;

    let ctx = AppContext::open(config)?;

    match cli.command {
        Commands::Login { username, password } => {
            tracing::info!("Logging in as {}", username);
            commands::auth::login(&ctx, &username, &password).await?;
        }
        Commands::Logout => commands::auth::logout(&ctx),
        Commands::Whoami => commands::auth::whoami(&ctx),
        Commands::Products { command } => {
            tracing::debug!(?command, "Starting product command");
            commands::products::handle_products(&ctx, command).await?;
        }
        Commands::Categories { command } => {
            tracing::debug!(?command, "Starting category command");
            commands::categories::handle_categories(&ctx, command).await?;
        }
    }

    Ok(())
}

/// Initialize tracing subscriber with environment filter
fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        "catalog_admin=debug"
    } else {
        "catalog_admin=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
