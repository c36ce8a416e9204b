pub mod models;
pub mod pii;

pub use models::{Inquiry, NewInquiry, NewPackage, Package};
