use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use catrelay::{
    build_router, Container, ContainerConfig, DEFAULT_CAT_API_BASE_URL, DEFAULT_COMPLETION_MODEL,
    DEFAULT_OPENAI_BASE_URL,
};

#[derive(Parser)]
#[command(name = "catrelay")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the relay HTTP server
    Serve(ServeArgs),
}

#[derive(Args)]
struct ServeArgs {
    /// Listen address
    #[arg(long, default_value = "0.0.0.0:8000", env = "LISTEN_ADDR")]
    addr: SocketAddr,

    #[arg(long, env = "OPENAI_API_KEY", default_value = "", hide_env_values = true)]
    openai_api_key: String,

    /// Assistant used for every run started by `/add_message`
    #[arg(long, env = "ASSISTANT_ID", default_value = "")]
    assistant_id: String,

    #[arg(long, env = "OPENAI_BASE_URL", default_value = DEFAULT_OPENAI_BASE_URL)]
    openai_base_url: String,

    /// Model for the `/chat` completion endpoint
    #[arg(long, env = "OPENAI_COMPLETION_MODEL", default_value = DEFAULT_COMPLETION_MODEL)]
    completion_model: String,

    #[arg(long, env = "CAT_API_KEY", hide_env_values = true)]
    cat_api_key: Option<String>,

    #[arg(long, env = "CAT_API_BASE_URL", default_value = DEFAULT_CAT_API_BASE_URL)]
    cat_api_base_url: String,

    /// Answer from in-memory mock upstreams instead of calling the real APIs
    #[arg(long)]
    mock_upstream: bool,
}

impl ServeArgs {
    fn container_config(&self) -> ContainerConfig {
        ContainerConfig {
            openai_api_key: self.openai_api_key.clone(),
            assistant_id: self.assistant_id.clone(),
            openai_base_url: self.openai_base_url.clone(),
            completion_model: self.completion_model.clone(),
            cat_api_key: self.cat_api_key.clone(),
            cat_api_base_url: self.cat_api_base_url.clone(),
            mock_upstream: self.mock_upstream,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Serve(args) => serve(args).await,
    }
}

async fn serve(args: ServeArgs) -> Result<()> {
    let container = Arc::new(Container::new(args.container_config())?);
    let app = build_router(container);

    let listener = tokio::net::TcpListener::bind(args.addr).await?;
    info!(addr = %args.addr, "starting catrelay");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("catrelay stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
