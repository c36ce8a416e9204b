pub mod inquiry;
pub mod package;

pub use inquiry::{Inquiry, NewInquiry};
pub use package::{NewPackage, Package};
