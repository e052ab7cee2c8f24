use serde::Deserialize;

/// A row of `product_images.csv`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImageRecord {
    pub product_id: String,
    pub image_url: String,
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub sort_order: Option<i64>,
}

/// A row of `variant_images.csv`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantImageRecord {
    pub variant_id: String,
    pub image_url: String,
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub sort_order: Option<i64>,
}
