//! Create the question database and its schema without starting the server

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use quizctl_server::db::{create_pool, ensure_schema, schema_exists};

use crate::config::QuizConfig;

#[derive(Parser, Debug)]
pub struct InitDbArgs {
    /// Database URL (overrides config file)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Config file (default: ~/.quizctl/config.toml)
    #[arg(long, env = "QUIZCTL_CONFIG")]
    pub config: Option<PathBuf>,
}

pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    let file = QuizConfig::load(args.config.as_deref())?;
    let database_url = file.database_url(args.database_url);

    let pool = create_pool(&database_url)
        .await
        .with_context(|| format!("Failed to open database {database_url}"))?;

    if schema_exists(&pool).await.context("Failed to inspect schema")? {
        println!("Schema already present in {database_url}");
    } else {
        ensure_schema(&pool)
            .await
            .context("Failed to create database schema")?;
        println!("Created schema in {database_url}");
    }

    pool.close().await;
    Ok(())
}
