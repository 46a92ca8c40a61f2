use axum::Router;
use dotenvy::dotenv;
use std::env;
use std::io;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod routes;
mod handlers;
mod services;
mod models;
mod types;
mod utils;

#[cfg(test)]
mod tests;

use config::{AppConfig, AppMode, AppState};

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut term) => tokio::select! {
                _ = tokio::signal::ctrl_c() => {},
                _ = term.recv() => {},
            },
            Err(_) => {
                tokio::signal::ctrl_c().await.ok();
            }
        }
    }
    #[cfg(not(unix))]
    tokio::signal::ctrl_c().await.ok();

    info!("shutting down");
}

async fn report(state: &AppState) -> Result<(), anyhow::Error> {
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    handlers::report::report(state.source.as_ref(), &mut out, &mut err).await
}

async fn serve(state: AppState, port: u16) -> Result<(), anyhow::Error> {
    let app: Router = routes::router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    info!("🚀 Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv().ok();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cfg = AppConfig::from_env()?;
    let state = cfg.build_state()?;

    match cfg.mode {
        AppMode::Report => report(&state).await,
        AppMode::Serve => serve(state, cfg.port).await,
    }
}
