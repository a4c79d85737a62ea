use asciify_server::{ServerConfig, app};
use clap::Parser;
use std::path::PathBuf;

/// Serve image to ASCII art conversion over HTTP
#[derive(Debug, Parser)]
#[command(name = "asciify-server", version, about)]
struct Args {
    /// Path to a TOML config file (defaults to ./asciify.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on, overrides the config file
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Configure logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut config = ServerConfig::load(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.server.bind = bind;
    }

    let router = app(&config)?;
    let listener = tokio::net::TcpListener::bind(&config.server.bind).await?;

    log::info!(
        "Listening on {} (timeout {}s, upload limit {} bytes, field '{}')",
        listener.local_addr()?,
        config.server.request_timeout_secs,
        config.server.max_upload_bytes,
        config.server.field_name
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for Ctrl-C: {}", e);
    }
}
