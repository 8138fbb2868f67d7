use serde::{Deserialize, Serialize};

/// Body of create and update requests. Any `id`, `createdAt` or `updatedAt`
/// sent along is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductInput {
    pub name: String,
    pub price: f64,
}

/// `?name=` filter; a missing value matches everything.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NameQuery {
    #[serde(default)]
    pub name: String,
}

/// `?min=&max=` filter, both bounds inclusive.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}
