use async_trait::async_trait;
use tripnest_catalog::PackageQuery;
use tripnest_shared::{Inquiry, NewInquiry, NewPackage, Package};

pub type RepoError = Box<dyn std::error::Error + Send + Sync>;
pub type RepoResult<T> = Result<T, RepoError>;

/// Repository trait for the package catalog.
///
/// Listings are returned in ascending id order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PackageRepository: Send + Sync {
    async fn list_packages(&self) -> RepoResult<Vec<Package>>;

    /// Packages matching `query`, ordered by its sort key with ties broken by
    /// ascending id.
    ///
    /// The default evaluates the query over a full listing. Stores that can
    /// filter natively override it and must return the same sequence.
    async fn find_packages(&self, query: &PackageQuery) -> RepoResult<Vec<Package>> {
        let packages = self.list_packages().await?;
        Ok(query.apply(packages))
    }

    async fn get_package(&self, id: i32) -> RepoResult<Option<Package>>;

    /// Assigns a fresh id; ids are never reused.
    async fn create_package(&self, package: &NewPackage) -> RepoResult<Package>;

    /// Removes every package, returning how many were deleted. Seeding only.
    async fn clear_packages(&self) -> RepoResult<u64>;

    /// Swaps the whole catalog for `catalog`, assigning fresh ids in order.
    ///
    /// The default clears and then inserts row by row. Stores with
    /// transactions override it so a failed insert leaves the old catalog
    /// in place.
    async fn replace_packages(&self, catalog: &[NewPackage]) -> RepoResult<Vec<Package>> {
        self.clear_packages().await?;
        let mut created = Vec::with_capacity(catalog.len());
        for package in catalog {
            created.push(self.create_package(package).await?);
        }
        Ok(created)
    }
}

/// Repository trait for visitor inquiries. Inquiries are append-only.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InquiryRepository: Send + Sync {
    async fn create_inquiry(&self, inquiry: &NewInquiry) -> RepoResult<Inquiry>;

    async fn list_inquiries(&self) -> RepoResult<Vec<Inquiry>>;
}
