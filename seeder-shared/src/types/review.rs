use serde::Deserialize;

/// A row of `reviews.csv`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    pub product_id: String,
    pub user_id: String,
    pub rating: i64,
    pub title: String,
    pub comment: String,
}
