pub mod intake;
pub mod repository;
pub mod search;

pub use intake::InquiryService;
pub use repository::{InquiryRepository, PackageRepository, RepoError, RepoResult};
pub use search::PackageSearchService;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Storage failure: {0}")]
    StorageError(#[source] RepoError),
}

pub type CoreResult<T> = Result<T, CoreError>;
