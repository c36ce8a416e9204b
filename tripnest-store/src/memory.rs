use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tripnest_core::repository::{InquiryRepository, PackageRepository, RepoResult};
use tripnest_shared::{Inquiry, NewInquiry, NewPackage, Package};

/// Process-local store for development and tests.
///
/// Maps are keyed by id, so iteration order is id order. Id counters only
/// move forward, so an id is never handed out twice.
pub struct MemoryStore {
    packages: RwLock<Table<Package>>,
    inquiries: RwLock<Table<Inquiry>>,
}

struct Table<T> {
    rows: BTreeMap<i32, T>,
    next_id: i32,
}

impl<T> Table<T> {
    fn new() -> Self {
        Self { rows: BTreeMap::new(), next_id: 1 }
    }

    fn allocate_id(&mut self) -> i32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            packages: RwLock::new(Table::new()),
            inquiries: RwLock::new(Table::new()),
        }
    }

    pub async fn with_packages(packages: impl IntoIterator<Item = NewPackage>) -> Self {
        let store = Self::new();
        {
            let mut table = store.packages.write().await;
            for package in packages {
                let id = table.allocate_id();
                table.rows.insert(id, package.with_id(id));
            }
        }
        store
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PackageRepository for MemoryStore {
    async fn list_packages(&self) -> RepoResult<Vec<Package>> {
        let table = self.packages.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn get_package(&self, id: i32) -> RepoResult<Option<Package>> {
        let table = self.packages.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn create_package(&self, package: &NewPackage) -> RepoResult<Package> {
        let mut table = self.packages.write().await;
        let id = table.allocate_id();
        let created = package.clone().with_id(id);
        table.rows.insert(id, created.clone());
        Ok(created)
    }

    async fn clear_packages(&self) -> RepoResult<u64> {
        let mut table = self.packages.write().await;
        let removed = table.rows.len() as u64;
        table.rows.clear();
        Ok(removed)
    }

    async fn replace_packages(&self, catalog: &[NewPackage]) -> RepoResult<Vec<Package>> {
        let mut table = self.packages.write().await;
        table.rows.clear();
        let mut created = Vec::with_capacity(catalog.len());
        for package in catalog {
            let id = table.allocate_id();
            let stored = package.clone().with_id(id);
            table.rows.insert(id, stored.clone());
            created.push(stored);
        }
        Ok(created)
    }
}

#[async_trait]
impl InquiryRepository for MemoryStore {
    async fn create_inquiry(&self, inquiry: &NewInquiry) -> RepoResult<Inquiry> {
        let mut table = self.inquiries.write().await;
        let id = table.allocate_id();
        let created = inquiry.clone().into_inquiry(id, Utc::now());
        table.rows.insert(id, created.clone());
        Ok(created)
    }

    async fn list_inquiries(&self) -> RepoResult<Vec<Inquiry>> {
        let table = self.inquiries.read().await;
        Ok(table.rows.values().cloned().collect())
    }
}
