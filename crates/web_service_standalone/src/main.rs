use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use chat_core::Config;

/// Standalone smoothie recommendation server.
#[derive(Parser, Debug)]
#[command(name = "smoothie_bot", version, about)]
struct Args {
    /// Port to listen on (overrides APP_PORT and config.toml)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let mut config = Config::new();
    if let Some(port) = args.port {
        config.port = port;
    }

    // Raw model replies are logged at debug level; keep that channel closed
    // in production.
    let default_filter = if config.is_production() { "info" } else { "debug" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_line_number(true)
                .with_file(false),
        )
        .init();

    tracing::info!("Starting standalone smoothie-bot service...");

    if let Err(e) = web_service::server::run(config).await {
        tracing::error!("Failed to run web service: {}", e);
        std::process::exit(1);
    }
}
