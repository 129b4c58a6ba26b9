use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use crate::config::AppConfig;
use crate::database::DatabaseManager;
use crate::routes;
use crate::state::AppState;

#[derive(Parser)]
#[command(name = "school-api")]
#[command(about = "REST API over a school's academic records")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Synchronize the schema and serve the API (default)")]
    Serve {
        #[arg(long, help = "Listen port, overrides PORT")]
        port: Option<u16>,
    },

    #[command(about = "Synchronize the schema and exit")]
    Migrate,
}

pub async fn run(cli: Cli, mut config: AppConfig) -> anyhow::Result<()> {
    let command = cli.command.unwrap_or(Commands::Serve { port: None });

    let db = DatabaseManager::connect(&config.database)
        .await
        .context("failed to connect to database")?;
    db.synchronize_schema()
        .await
        .context("schema synchronization failed")?;

    match command {
        Commands::Migrate => {
            db.close().await;
            Ok(())
        }
        Commands::Serve { port } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            serve(&config, db).await
        }
    }
}

async fn serve(config: &AppConfig, db: DatabaseManager) -> anyhow::Result<()> {
    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    info!("School API listening on http://{}", bind_addr);

    let app = routes::app(AppState::new(db.clone()));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    db.close().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
