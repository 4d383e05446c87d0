use serde::{Deserialize, Serialize};

/// Complete desired state of a product.
///
/// Used by both create and update; update replaces every field, so an
/// absent `category_id` clears the product's category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub price: f64,
    pub quantity: i32,
    #[serde(default)]
    pub category_id: Option<i32>,
}
