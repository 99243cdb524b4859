// src/main.rs
use anyhow::Result;
use std::sync::Arc;
use tokio::signal;
use tracing::info;

use traffic_gen::config::{self, Config};
use traffic_gen::generator::Generator;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("traffic_gen=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    // Optional config file; with no argument the built-in defaults apply.
    let config = match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading configuration from: {}", path);
            config::load_config(&path).await?
        }
        None => Config::default(),
    };

    info!("🚦 Smart Traffic Generator Started...");
    info!("   (Automatically handles Rate Limits)");
    info!("Target: {}", config.target.url);

    let generator = Arc::new(Generator::new(&config)?);

    let runner = {
        let generator = generator.clone();
        tokio::spawn(async move {
            generator.run().await;
        })
    };

    shutdown_signal().await;
    generator.shutdown();
    runner.await?;

    Ok(())
}

// Graceful shutdown handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
