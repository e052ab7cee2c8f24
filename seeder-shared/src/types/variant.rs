use serde::Deserialize;

/// A row of `product_variants.csv`.
///
/// `attribute_values` carries a JSON object embedded in the CSV cell
/// (for example `{"color": "red", "size": "M"}`); it is parsed at payload
/// construction time, not at load time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantRecord {
    pub id: String,
    pub product_id: String,
    pub sku: String,
    pub attribute_values: String,
    pub price: f64,
    pub stock: i64,
}
