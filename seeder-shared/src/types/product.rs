use serde::Deserialize;

/// A row of `products.csv`.
///
/// `brand_id` and `category_id` reference rows of `brands.csv` and
/// `categories.csv` by source key; both must resolve through the registry
/// before the product can be created.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub sku: String,
    pub is_active: bool,
    pub is_featured: bool,
    pub price: f64,
    pub stock: i64,
    pub brand_id: String,
    pub category_id: String,
}
