use serde::{Deserialize, Serialize};

/// A shop catalog item. Read-only reference data owned by the catalog;
/// ids are stable slugs, not surrogate keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Whole dollars.
    pub price: u32,
    pub rating: f32,
    pub image: String,
    pub category: String,
}
