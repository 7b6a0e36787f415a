mod commands;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pexels_api::ClientBuilder;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "pexels")]
#[command(about = "Search and browse photos, videos and collections on Pexels")]
struct Cli {
    /// Output format: table, json, csv, markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Pexels API key
    #[arg(long, env = "PEXELS_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// User-Agent header sent with every request
    #[arg(long, global = true)]
    user_agent: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get a photo, search photos, or list curated photos
    Photos(commands::photos::PhotosArgs),
    /// Get a video, search videos, or list popular videos
    Videos(commands::videos::VideosArgs),
    /// List collections or the media in one collection
    Collections(commands::collections::CollectionsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pexels=info".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "md" | "markdown" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    let api_key = cli
        .api_key
        .as_deref()
        .context("no API key: set PEXELS_API_KEY or pass --api-key")?;
    let mut builder = ClientBuilder::new(api_key);
    if let Some(user_agent) = &cli.user_agent {
        builder = builder.user_agent(user_agent);
    }
    let client = builder.build()?;

    match &cli.command {
        Commands::Photos(args) => commands::photos::run(args, &client, &format).await?,
        Commands::Videos(args) => commands::videos::run(args, &client, &format).await?,
        Commands::Collections(args) => {
            commands::collections::run(args, &client, &format).await?
        }
    }

    Ok(())
}
