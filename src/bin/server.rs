//! sql-exec server: reads settings from env (and `.env`), serves the exec endpoint.

use sql_exec::{app, AppState, Settings};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("sql_exec=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    if settings.database_url.is_none() {
        tracing::warn!(
            "{} is not set; every exec request will fail",
            sql_exec::config::DATABASE_URL_VAR
        );
    }

    let state = AppState::from_settings(&settings);
    let router = app(state);

    let listener = TcpListener::bind(settings.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
