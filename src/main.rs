mod config;
mod errors;
mod models;
mod server;
mod state;

use crate::config::AppConfig;
use crate::errors::{PricerError, PricerResult};
use crate::state::AppState;
use std::future::Future;

#[tokio::main]
async fn main() {
    eprintln!("[bs_pricer] binary started, setting up logging...");

    // Config first so LOG_LEVEL can seed the filter; report any error once
    // logging is up.
    let cfg = AppConfig::from_env();
    let fallback_level = cfg
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&fallback_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cfg = match cfg {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("config error: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        forward_convention = %cfg.forward_convention,
        strict_opt_type = cfg.strict_opt_type,
        "bs_pricer starting"
    );

    if let Err(e) = run(&cfg, shutdown_signal()).await {
        tracing::error!("{e}");
        std::process::exit(1);
    }

    tracing::info!("bs_pricer stopped");
}

/// Bind and serve until `shutdown` resolves.
async fn run<F>(cfg: &AppConfig, shutdown: F) -> PricerResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = server::build_router(AppState::new(cfg));

    let addr = cfg.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| PricerError::Io(format!("bind {addr}: {e}")))?;
    tracing::info!("server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("failed to install Ctrl-C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
