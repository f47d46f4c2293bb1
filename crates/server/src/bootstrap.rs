use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use warung_agent::{ChatCompletionsClient, CompletionClient, FallbackResponder};
use warung_core::config::{AppConfig, ConfigError, LoadOptions};
use warung_db::{connect, migrations, seed, DbPool, RepositoryError, SqlProductRepository};

use crate::service::ReplyService;

pub struct Application {
    pub config: AppConfig,
    pub db_pool: DbPool,
    pub service: Arc<ReplyService>,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("database connection failed: {0}")]
    DatabaseConnect(#[source] sqlx::Error),
    #[error("database migration failed: {0}")]
    Migration(#[source] sqlx::migrate::MigrateError),
    #[error("catalog seeding failed: {0}")]
    Seed(#[source] RepositoryError),
    #[error("completion http client construction failed: {0}")]
    HttpClient(#[source] reqwest::Error),
}

pub async fn bootstrap(options: LoadOptions) -> Result<Application, BootstrapError> {
    let config = AppConfig::load(options)?;
    bootstrap_with_config(config).await
}

/// Wire the full startup path: pool, migrations, seed rows, completion
/// client, reply service.
pub async fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(
        event_name = "system.bootstrap.start",
        correlation_id = "bootstrap",
        "starting application bootstrap"
    );

    let db_pool = connect(&config.database).await.map_err(BootstrapError::DatabaseConnect)?;
    info!(
        event_name = "system.bootstrap.database_connected",
        correlation_id = "bootstrap",
        "database connection established"
    );

    migrations::run_pending(&db_pool).await.map_err(BootstrapError::Migration)?;
    info!(
        event_name = "system.bootstrap.migrations_applied",
        correlation_id = "bootstrap",
        "database migrations applied"
    );

    seed::apply(&db_pool).await.map_err(BootstrapError::Seed)?;
    info!(
        event_name = "system.bootstrap.catalog_seeded",
        correlation_id = "bootstrap",
        "catalog seed rows ensured"
    );

    let completion_client = ChatCompletionsClient::from_config(&config.llm)
        .map_err(BootstrapError::HttpClient)?
        .map(|client| Arc::new(client) as Arc<dyn CompletionClient>);
    let responder = FallbackResponder::new(completion_client, config.llm.verbose_errors);
    info!(
        event_name = "system.bootstrap.fallback_configured",
        correlation_id = "bootstrap",
        enabled = responder.is_enabled(),
        "ai fallback responder configured"
    );

    let products = Arc::new(SqlProductRepository::new(db_pool.clone()));
    let service =
        Arc::new(ReplyService::new(products, responder, config.handoff.agent_contact.clone()));

    Ok(Application { config, db_pool, service })
}

#[cfg(test)]
mod tests {
    use warung_core::config::{ConfigOverrides, LoadOptions};

    use crate::bootstrap::bootstrap;

    fn options(database_url: &str) -> LoadOptions {
        LoadOptions {
            overrides: ConfigOverrides {
                database_url: Some(database_url.to_string()),
                ..ConfigOverrides::default()
            },
            ..LoadOptions::default()
        }
    }

    #[tokio::test]
    async fn bootstrap_migrates_and_seeds_the_catalog() {
        let app = bootstrap(options("sqlite::memory:?cache=shared"))
            .await
            .expect("bootstrap should succeed against an in-memory database");

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
            .fetch_one(&app.db_pool)
            .await
            .expect("products table should exist after bootstrap");
        assert_eq!(count, 2, "bootstrap should seed the two catalog rows");

        app.db_pool.close().await;
    }

    #[tokio::test]
    async fn bootstrapped_service_answers_a_stock_inquiry() {
        let app = bootstrap(options("sqlite::memory:?cache=shared"))
            .await
            .expect("bootstrap should succeed");

        let message = warung_core::IncomingMessage::new("+628123456789", "stok produk a");
        let reply = app.service.reply_to(&message, "bootstrap-test").await;
        assert_eq!(reply, "Stok produk a: 10 unit. Harga: Rp 100,000");

        app.db_pool.close().await;
    }

    #[tokio::test]
    async fn bootstrap_fails_fast_on_invalid_database_url() {
        let result = bootstrap(options("postgres://localhost/warung")).await;

        assert!(result.is_err());
        let message = result.err().expect("error").to_string();
        assert!(message.contains("database.url"));
    }
}
