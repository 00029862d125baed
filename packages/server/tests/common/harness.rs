//! Postgres-backed harness for store tests.
//!
//! Every test binary starts a single container on first use and migrates it
//! once; each test gets its own pool and an emptied `members` table.

use std::sync::Arc;

use anyhow::{Context, Result};
use server_core::kernel::test_dependencies::MockCepLookup;
use server_core::kernel::{PostgresMemberStore, ServerDeps, TestDependencies};
use sqlx::PgPool;
use test_context::AsyncTestContext;
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;

use super::GraphQLClient;

struct Database {
    url: String,
    _container: ContainerAsync<Postgres>,
}

static DATABASE: OnceCell<Database> = OnceCell::const_new();

async fn start_database() -> Result<Database> {
    // RUST_LOG=debug cargo test -- --ignored --nocapture
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let container = Postgres::default()
        .with_tag("16")
        .start()
        .await
        .context("starting postgres container")?;

    let url = format!(
        "postgresql://postgres:postgres@{}:{}/postgres",
        container.get_host().await?,
        container.get_host_port_ipv4(5432).await?
    );

    let pool = PgPool::connect(&url).await.context("connecting for migrations")?;
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("running migrations")?;
    pool.close().await;

    Ok(Database {
        url,
        _container: container,
    })
}

async fn database_url() -> &'static str {
    let database = DATABASE
        .get_or_init(|| async { start_database().await.expect("test database") })
        .await;
    &database.url
}

pub struct TestHarness {
    pub db_pool: PgPool,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        let db_pool = PgPool::connect(database_url().await)
            .await
            .expect("connecting to test database");
        Self { db_pool }
    }

    async fn teardown(self) {
        // Logins are unique across the table
        let _ = sqlx::query("DELETE FROM members")
            .execute(&self.db_pool)
            .await;
        self.db_pool.close().await;
    }
}

impl TestHarness {
    /// Real member store, mocked CEP lookup
    pub fn deps(&self) -> Arc<ServerDeps> {
        Arc::new(ServerDeps::new(
            Arc::new(PostgresMemberStore::new(self.db_pool.clone())),
            Arc::new(MockCepLookup::new()),
            Arc::new(TestDependencies::jwt_service()),
            None,
            "testcontainers".to_string(),
        ))
    }

    pub fn graphql(&self) -> GraphQLClient {
        GraphQLClient::new(self.deps())
    }
}
