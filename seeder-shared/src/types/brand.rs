use serde::Deserialize;

/// A row of `brands.csv`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub website: String,
    pub image_url: String,
}
