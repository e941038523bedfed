//! qa-server binary
//!
//! Connects to PostgreSQL, makes sure the schema exists and serves the
//! questions/answers API until Ctrl+C or SIGTERM.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use qa_server::db::{create_pool_with_options, resolve_database_url, schema};
use qa_server::http::{run_server, ServerConfig};

mod tracing_setup;

#[derive(Parser, Debug)]
#[command(name = "qa-server", version, about = "Questions and answers over HTTP")]
struct Args {
    /// Address to bind to
    #[arg(long, short = 'b', env = "QA_BIND", default_value = "127.0.0.1:8080")]
    bind: SocketAddr,

    /// PostgreSQL connection string, URL or key/value form (takes precedence)
    #[arg(long, env = "DATABASE_DSN", hide_env_values = true)]
    database_dsn: Option<String>,

    /// PostgreSQL connection URL
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, env = "QA_MAX_CONNECTIONS", default_value_t = 5)]
    max_connections: u32,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    cors_permissive: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

impl Args {
    fn connection_string(&self) -> String {
        resolve_database_url(self.database_dsn.clone(), self.database_url.clone())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine
    dotenvy::dotenv().ok();

    let args = Args::parse();
    tracing_setup::init(args.debug)?;

    tracing::info!("Starting qa-server on {}", args.bind);

    let pool = create_pool_with_options(&args.connection_string(), args.max_connections)
        .await
        .context("Failed to connect to database")?;

    schema::ensure(&pool)
        .await
        .context("Failed to create database schema")?;

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
