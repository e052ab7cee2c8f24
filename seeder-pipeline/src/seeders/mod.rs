//! Per-entity seeders.
//!
//! One routine per entity kind, all with the same shape: resolve every
//! foreign key through the registry (a miss skips the record with a
//! warning), build the creation payload, issue the call, and record the
//! backend-assigned identifier. Failures are per-record and never abort a
//! step; each seeder returns a [`StepReport`](seeder_shared::types::StepReport)
//! for the run summary.
mod brands;
mod carts;
mod categories;
mod images;
mod orders;
mod products;
mod reviews;
mod users;
mod variants;
mod wishlists;

pub use brands::seed_brands;
pub use carts::{seed_cart_items, seed_carts};
pub use categories::seed_categories;
pub use images::{seed_product_images, seed_variant_images};
pub use orders::{seed_order_items, seed_orders};
pub use products::seed_products;
pub use reviews::seed_reviews;
pub use users::seed_users;
pub use variants::seed_variants;
pub use wishlists::{seed_wishlist_items, seed_wishlists};

pub mod steps {
    //! Canonical step names, shared by the orchestrator and the run ledger.
    pub const USERS: &str = "users";
    pub const BRANDS: &str = "brands";
    pub const CATEGORIES: &str = "categories";
    pub const PRODUCTS: &str = "products";
    pub const VARIANTS: &str = "product_variants";
    pub const PRODUCT_IMAGES: &str = "product_images";
    pub const VARIANT_IMAGES: &str = "variant_images";
    pub const REVIEWS: &str = "reviews";
    pub const WISHLISTS: &str = "wishlists";
    pub const WISHLIST_ITEMS: &str = "wishlist_products";
    pub const CARTS: &str = "shopping_carts";
    pub const CART_ITEMS: &str = "cart_items";
    pub const ORDERS: &str = "orders";
    pub const ORDER_ITEMS: &str = "order_items";
}

use serde_json::Value;
use storefront_client::envelope;
use tracing::error;

/// Extracts the backend-assigned identifier from a creation response.
///
/// The response may be a bare object or wrapped in a `data` envelope;
/// numeric identifiers are normalized to strings. Returns `None` (and logs)
/// when the body has no usable identifier, which the seeders count as a
/// failed record.
pub(crate) fn created_id(response: Value) -> Option<String> {
    let body = match envelope::unwrap(response) {
        Ok(body) => body,
        Err(e) => {
            error!("creation response rejected: {}", e);
            return None;
        }
    };
    match body.get("id") {
        Some(Value::String(id)) => Some(id.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => {
            error!("creation response carried no id: {}", body);
            None
        }
    }
}
