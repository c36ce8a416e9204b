use tracing::info;
use tripnest_core::repository::{PackageRepository, RepoResult};
use tripnest_shared::{NewPackage, Package};

const CATALOG_JSON: &str = include_str!("../data/packages.json");

/// The bundled package catalog, in insertion order.
pub fn sample_catalog() -> Result<Vec<NewPackage>, serde_json::Error> {
    serde_json::from_str(CATALOG_JSON)
}

/// Replaces every package in `repo` with `catalog` in one step.
///
/// The new packages receive fresh ids. On failure the store keeps its
/// previous catalog wherever it supports transactions.
pub async fn seed_packages(
    repo: &dyn PackageRepository,
    catalog: Vec<NewPackage>,
) -> RepoResult<Vec<Package>> {
    let created = repo.replace_packages(&catalog).await?;
    for package in &created {
        info!("Added package: {}", package.title);
    }

    info!("Seeded {} packages", created.len());
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::memory::MemoryStore;

    /// Accepts only whole-catalog replacement; piecemeal writes fail.
    #[derive(Default)]
    struct ReplaceOnly {
        replaced: Mutex<Vec<usize>>,
    }

    #[async_trait]
    impl PackageRepository for ReplaceOnly {
        async fn list_packages(&self) -> RepoResult<Vec<Package>> {
            Ok(Vec::new())
        }

        async fn get_package(&self, _id: i32) -> RepoResult<Option<Package>> {
            Ok(None)
        }

        async fn create_package(&self, _package: &NewPackage) -> RepoResult<Package> {
            Err("single insert outside replace".into())
        }

        async fn clear_packages(&self) -> RepoResult<u64> {
            Err("clear outside replace".into())
        }

        async fn replace_packages(&self, catalog: &[NewPackage]) -> RepoResult<Vec<Package>> {
            self.replaced.lock().unwrap().push(catalog.len());
            Ok(catalog
                .iter()
                .zip(1..)
                .map(|(p, id)| p.clone().with_id(id))
                .collect())
        }
    }

    #[test]
    fn test_sample_catalog_is_well_formed() {
        let catalog = sample_catalog().expect("bundled catalog should parse");
        assert_eq!(catalog.len(), 23);
        assert!(catalog.iter().all(|p| p.price >= 0 && p.duration > 0));
        assert!(catalog.iter().any(|p| p.destination == "Kerala, India"));
    }

    #[tokio::test]
    async fn test_seed_replaces_existing_packages() {
        let store = MemoryStore::with_packages(sample_catalog().unwrap()).await;
        let catalog = sample_catalog().unwrap();

        let seeded = seed_packages(&store, catalog).await.unwrap();
        assert_eq!(seeded.len(), 23);
        assert_eq!(seeded[0].id, 24);
        assert_eq!(store.list_packages().await.unwrap().len(), 23);
    }

    #[tokio::test]
    async fn test_seed_replaces_catalog_in_one_call() {
        let repo = ReplaceOnly::default();

        let seeded = seed_packages(&repo, sample_catalog().unwrap()).await.unwrap();
        assert_eq!(seeded.len(), 23);
        assert_eq!(*repo.replaced.lock().unwrap(), vec![23]);
    }
}
