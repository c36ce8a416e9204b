pub mod app_config;
pub mod database;
pub mod inquiry_repo;
pub mod memory;
pub mod package_repo;
pub mod seed;

pub use database::DbClient;
pub use inquiry_repo::PostgresInquiryRepository;
pub use memory::MemoryStore;
pub use package_repo::PostgresPackageRepository;
