use anyhow::{bail, Context};
use tripnest_store::app_config::{Config, StorageBackend};
use tripnest_store::{seed, DbClient, PostgresPackageRepository};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Replaces the package catalog in the configured database with the bundled
/// sample catalog.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tripnest_store=info,tripnest_seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    if config.storage.backend != StorageBackend::Postgres {
        bail!("Seeding requires storage.backend = \"postgres\"; the memory backend seeds itself on start");
    }

    let db = DbClient::new(config.database_url()?, &config.database)
        .await
        .context("Failed to connect to database")?;
    db.migrate().await.context("Failed to run migrations")?;

    let catalog = seed::sample_catalog().context("Bundled catalog is malformed")?;
    let repo = PostgresPackageRepository::new(db.pool.clone());
    let seeded = seed::seed_packages(&repo, catalog)
        .await
        .map_err(|e| anyhow::anyhow!(e))
        .context("Seeding failed")?;

    tracing::info!("Database seeded with {} packages", seeded.len());
    Ok(())
}
