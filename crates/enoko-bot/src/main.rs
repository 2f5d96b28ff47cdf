mod discord;
mod handler;
mod reply;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use enoko_core::DEFAULT_CATALOG_HOST;
use enoko_scraper::{HpoiClient, LinkDetector};
use serenity::prelude::GatewayIntents;
use tracing_subscriber::EnvFilter;

use crate::discord::Bot;

#[derive(Debug, Parser)]
#[command(name = "enoko")]
#[command(about = "Discord bot that previews hpoi.net figure links")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Connect to Discord and answer catalog links (default)
    Run,
    /// Look up every catalog link in TEXT and print the records as JSON
    Lookup {
        text: String,
        #[arg(long, env = "ENOKO_CATALOG_HOST", default_value = DEFAULT_CATALOG_HOST)]
        host: String,
        #[arg(long, env = "ENOKO_SCRAPER_REQUEST_TIMEOUT_SECS", default_value_t = 30)]
        timeout_secs: u64,
        #[arg(long, env = "ENOKO_SCRAPER_USER_AGENT")]
        user_agent: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run().await,
        Commands::Lookup {
            text,
            host,
            timeout_secs,
            user_agent,
        } => lookup(&text, &host, timeout_secs, user_agent.as_deref()).await,
    }
}

fn init_tracing(default_level: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    let config = enoko_core::load_app_config()?;
    init_tracing(&config.log_level)?;

    serenity::utils::validate_token(&config.discord_token)
        .map_err(|_| anyhow::anyhow!("DISCORD_TOKEN is not a valid bot token"))?;

    let detector = LinkDetector::new(&config.catalog_host)?;
    let client = HpoiClient::new(
        config.scraper_request_timeout_secs,
        config.scraper_user_agent.as_deref(),
    )?;

    let intents = GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;
    let mut discord = serenity::Client::builder(&config.discord_token, intents)
        .event_handler(Bot::new(detector, client))
        .await
        .context("failed to build Discord client")?;

    let shard_manager = discord.shard_manager.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        shard_manager.shutdown_all().await;
    });

    tracing::info!(catalog_host = %config.catalog_host, "starting bot");
    discord
        .start()
        .await
        .context("Discord connection failed")?;
    tracing::info!("Discord connection closed");
    Ok(())
}

async fn lookup(
    text: &str,
    host: &str,
    timeout_secs: u64,
    user_agent: Option<&str>,
) -> anyhow::Result<()> {
    init_tracing("warn")?;

    let detector = LinkDetector::new(host)?;
    let client = HpoiClient::new(timeout_secs, user_agent)?;

    let links = detector.find_all(text);
    if links.is_empty() {
        println!("No catalog links found.");
        return Ok(());
    }

    for url in links {
        match client.fetch_figure(&url).await {
            Ok(figure) => {
                let output = serde_json::json!({ "url": url, "figure": figure });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            Err(error) => tracing::warn!(url = %url, %error, "lookup failed"),
        }
    }
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, closing Discord connection");
}
