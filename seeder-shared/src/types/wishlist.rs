use serde::Deserialize;

/// A row of `wishlists.csv`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistRecord {
    pub id: String,
    pub user_id: String,
    pub name: String,
}

/// A row of `wishlist_products.csv`, linking a wishlist to a product.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItemRecord {
    pub wishlist_id: String,
    pub product_id: String,
}
