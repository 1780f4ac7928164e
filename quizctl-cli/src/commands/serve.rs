//! HTTP server command for the quizctl question API

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use quizctl_core::QuestionService;
use quizctl_server::db::{create_pool, ensure_schema};
use quizctl_server::{run_server, AppState, SqliteQuestionRepo};

use crate::config::{QuizConfig, ServerOverrides};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:3000)
    #[arg(long, short = 'b', env = "QUIZCTL_BIND")]
    pub bind: Option<SocketAddr>,

    /// Database URL (overrides config file)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Per-request timeout in seconds (default: 30)
    #[arg(long, value_name = "SECS")]
    pub request_timeout: Option<u64>,

    /// Config file (default: ~/.quizctl/config.toml)
    #[arg(long, env = "QUIZCTL_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let file = QuizConfig::load(args.config.as_deref())?;
    let database_url = file.database_url(args.database_url);
    let config = file.server_config(&ServerOverrides {
        bind: args.bind,
        cors_permissive: args.cors_permissive,
        request_timeout_secs: args.request_timeout,
    });

    tracing::info!("Starting quizctl server on {}", config.bind_addr);

    let pool = create_pool(&database_url)
        .await
        .with_context(|| format!("Failed to open database {database_url}"))?;
    ensure_schema(&pool)
        .await
        .context("Failed to create database schema")?;

    let service = QuestionService::new(Arc::new(SqliteQuestionRepo::new(pool.clone())));

    // Run server (blocks until shutdown)
    run_server(AppState::new(service), config)
        .await
        .context("Server error")?;

    pool.close().await;
    Ok(())
}
