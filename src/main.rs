use anyhow::Result;
use clap::{Parser, Subcommand};
use classroom_catalyst::{create_app, AppState, LlmClient, MemoryPlanStore, ServerConfig, Upstream};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "catalyst")]
#[command(about = "Classroom Catalyst lesson asset server")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Run {
        #[arg(short, long, default_value = "catalyst.toml")]
        config: PathBuf,
    },
    Init {
        #[arg(short, long, default_value = "catalyst.toml")]
        config: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "classroom_catalyst=info,catalyst=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config: config_path } => {
            run_server(&config_path).await?;
        }
        Commands::Init { config: config_path } => {
            init_config(&config_path)?;
        }
    }

    Ok(())
}

async fn run_server(config_path: &Path) -> Result<()> {
    let mut config = if config_path.exists() {
        info!("Loading config from {:?}", config_path);
        ServerConfig::load(config_path)?
    } else {
        info!("Config file not found, using defaults");
        ServerConfig::default()
    };
    config.apply_env_overrides()?;

    let upstream = LlmClient::new(config.llm.to_llm_config());
    if !upstream.is_configured() {
        warn!(
            "{} is not set; generation endpoints will answer with a configuration error",
            config.llm.api_key_env
        );
    }

    let state = Arc::new(AppState::new(
        Arc::new(upstream),
        Arc::new(MemoryPlanStore::new()),
    ));
    let app = create_app(state);

    let listener = TcpListener::bind(&config.listen_addr()).await?;
    info!("Server is running on {}", config.listen_addr());

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down...");
        })
        .await?;

    Ok(())
}

fn init_config(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        anyhow::bail!("Config file already exists: {:?}", config_path);
    }

    let config = ServerConfig::default();
    config.save(config_path)?;
    println!("Created config file: {:?}", config_path);
    println!("\nEdit the config file to:");
    println!("  - Change the bind address or port");
    println!("  - Point api_base at a compatible provider");
    println!("  - Pick the model and the env var holding the API key");

    Ok(())
}
