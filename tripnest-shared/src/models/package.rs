use serde::{Deserialize, Serialize};

/// A travel package as stored in the catalog.
///
/// Packages are created by administrative seeding only and never change
/// afterwards; `id` is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub image_url: String,
    /// Whole currency units.
    pub price: i32,
    /// Days.
    pub duration: i32,
    pub category: String,
    pub sub_category: String,
    pub destination: String,
}

/// Package fields supplied on creation, before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPackage {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub price: i32,
    pub duration: i32,
    pub category: String,
    pub sub_category: String,
    pub destination: String,
}

impl NewPackage {
    pub fn with_id(self, id: i32) -> Package {
        Package {
            id,
            title: self.title,
            description: self.description,
            image_url: self.image_url,
            price: self.price,
            duration: self.duration,
            category: self.category,
            sub_category: self.sub_category,
            destination: self.destination,
        }
    }
}
