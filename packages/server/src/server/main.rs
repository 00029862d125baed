// Pastoral Familiar API server

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use brasilapi::{BrasilApiOptions, BrasilApiService};
use server_core::domains::auth::JwtService;
use server_core::kernel::{BrasilApiAdapter, PostgresMemberStore, ServerDeps};
use server_core::{server::build_app, Config};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn connect_database(config: &Config) -> Result<PgPool> {
    info!(database = %config.database_label(), "connecting to database");
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    info!("database ready");

    Ok(pool)
}

/// A configured logo that cannot be read stops startup.
fn read_report_logo(config: &Config) -> Result<Option<Arc<Vec<u8>>>> {
    let Some(path) = &config.report_logo_path else {
        return Ok(None);
    };
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read report logo at {path}"))?;
    info!(path = %path, bytes = bytes.len(), "report logo loaded");
    Ok(Some(Arc::new(bytes)))
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = Config::from_env().context("Failed to load configuration")?;
    let pool = connect_database(&config).await?;
    let report_logo = read_report_logo(&config)?;

    let cep_service = BrasilApiService::new(BrasilApiOptions {
        base_url: config.brasilapi_base_url.clone(),
    });

    let deps = ServerDeps::new(
        Arc::new(PostgresMemberStore::new(pool)),
        Arc::new(BrasilApiAdapter::new(Arc::new(cep_service))),
        Arc::new(JwtService::new(&config.jwt_secret, config.jwt_issuer.as_str())),
        report_logo,
        config.database_label(),
    );

    let app = build_app(Arc::new(deps), &config.allowed_origins)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;
    info!(%addr, "Pastoral Familiar API listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error")
}
