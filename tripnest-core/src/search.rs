use std::sync::Arc;

use tracing::{debug, error};
use tripnest_catalog::{PackageQuery, SearchParams};
use tripnest_shared::Package;

use crate::repository::PackageRepository;
use crate::{CoreError, CoreResult};

/// Package query engine over an injected store.
///
/// Every call reads the store afresh; nothing is cached between searches.
#[derive(Clone)]
pub struct PackageSearchService {
    packages: Arc<dyn PackageRepository>,
}

impl PackageSearchService {
    pub fn new(packages: Arc<dyn PackageRepository>) -> Self {
        Self { packages }
    }

    /// Returns the packages matching `params` in the requested order.
    ///
    /// No matches is an empty list. A store failure is returned as
    /// [`CoreError::StorageError`], never as a partial list.
    pub async fn search(&self, params: &SearchParams) -> CoreResult<Vec<Package>> {
        params
            .validate()
            .map_err(|e| CoreError::ValidationError(e.to_string()))?;

        let query = PackageQuery::new(params);
        debug!("Resolved package query: {:?}", query);

        self.packages.find_packages(&query).await.map_err(|e| {
            error!("Package search failed: {}", e);
            CoreError::StorageError(e)
        })
    }

    pub async fn get(&self, id: i32) -> CoreResult<Package> {
        self.packages
            .get_package(id)
            .await
            .map_err(CoreError::StorageError)?
            .ok_or_else(|| CoreError::NotFound(format!("package {}", id)))
    }
}
