use serde::Deserialize;

/// A row of `orders.csv`.
///
/// Orders are composite: the shell is created first with an empty item list,
/// then `order_items.csv` rows are grouped by `order_id` and attached with a
/// follow-up update call.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub id: String,
    pub user_id: String,
    pub shipping_address: String,
    pub billing_address: String,
    pub payment_method: String,
    #[serde(default)]
    pub order_notes: Option<String>,
}

/// A row of `order_items.csv`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRecord {
    pub order_id: String,
    pub product_id: String,
    #[serde(default)]
    pub variant_id: Option<String>,
    pub quantity: i64,
}
