use serde::Deserialize;

/// A row of `shopping_carts.csv`.
///
/// The backend creates one cart per user at registration, so cart rows are
/// only recorded locally; no creation call is issued for them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartRecord {
    pub id: String,
    pub user_id: String,
}

/// A row of `cart_items.csv`. `variant_id` is optional; an unresolvable
/// variant reference is dropped from the payload rather than skipping the row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemRecord {
    pub product_id: String,
    #[serde(default)]
    pub variant_id: Option<String>,
    pub quantity: i64,
}
