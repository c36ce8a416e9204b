use std::sync::Arc;

use anyhow::Context;
use tripnest_core::{InquiryRepository, InquiryService, PackageRepository, PackageSearchService};
use tripnest_store::app_config::{Config, StorageBackend};
use tripnest_store::{seed, DbClient, MemoryStore, PostgresInquiryRepository, PostgresPackageRepository};

use crate::metrics::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub packages: PackageSearchService,
    pub inquiries: InquiryService,
    pub metrics: Arc<Metrics>,
    pub cors_allow_any_origin: bool,
}

impl AppState {
    pub fn new(
        packages: Arc<dyn PackageRepository>,
        inquiries: Arc<dyn InquiryRepository>,
    ) -> Result<Self, prometheus::Error> {
        Ok(Self {
            packages: PackageSearchService::new(packages),
            inquiries: InquiryService::new(inquiries),
            metrics: Arc::new(Metrics::new()?),
            cors_allow_any_origin: true,
        })
    }

    /// Wires the configured storage backend into a fresh state.
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        let state = match config.storage.backend {
            StorageBackend::Memory => {
                let store = if config.storage.seed_sample_data {
                    let catalog = seed::sample_catalog().context("Bundled catalog is malformed")?;
                    MemoryStore::with_packages(catalog).await
                } else {
                    MemoryStore::new()
                };
                let store = Arc::new(store);
                tracing::info!("Using in-memory storage");
                Self::new(store.clone(), store)?
            }
            StorageBackend::Postgres => {
                let url = config.database_url()?;
                let db = DbClient::new(url, &config.database)
                    .await
                    .context("Failed to connect to database")?;
                db.migrate().await.context("Failed to run migrations")?;

                match db.count_packages().await {
                    Ok(count) => tracing::info!("Database connection successful, found {} packages", count),
                    Err(e) => tracing::warn!("Could not count packages: {}", e),
                }

                Self::new(
                    Arc::new(PostgresPackageRepository::new(db.pool.clone())),
                    Arc::new(PostgresInquiryRepository::new(db.pool)),
                )?
            }
        };

        Ok(Self {
            cors_allow_any_origin: config.cors.allow_any_origin,
            ..state
        })
    }
}
