use seeder_registry::EntityRegistry;
use seeder_shared::types::{EntityKind, StepReport, WishlistItemRecord, WishlistRecord};
use serde_json::json;
use storefront_client::StorefrontApi;
use tracing::{error, info, warn};

use super::{created_id, steps};

/// Seeds wishlists. The backend attaches the wishlist to the authenticated
/// session user, so the payload carries only the name; the user reference
/// still gates the row so orphan rows are skipped.
pub async fn seed_wishlists(
    api: &dyn StorefrontApi,
    registry: &mut EntityRegistry,
    records: &[WishlistRecord],
) -> StepReport {
    info!("starting wishlist seeding");
    if records.is_empty() {
        info!("no wishlist data to seed");
        return StepReport::empty(steps::WISHLISTS, true);
    }

    let mut succeeded = 0;
    for record in records {
        if !registry.contains(EntityKind::User, &record.user_id) {
            warn!("skipping wishlist - user not found: {}", record.user_id);
            continue;
        }

        let payload = json!({"name": record.name});
        match api
            .post("/api/wishlists", &payload)
            .await
            .and_then(created_id)
        {
            Some(id) => {
                registry.record(EntityKind::Wishlist, record.id.clone(), id);
                succeeded += 1;
                info!("created wishlist: {}", record.name);
            }
            None => error!("failed to create wishlist: {}", record.name),
        }
    }

    info!(
        "wishlist seeding completed: {}/{} successful",
        succeeded,
        records.len()
    );
    StepReport::completed(steps::WISHLISTS, records.len(), succeeded)
}

/// Adds products to seeded wishlists.
pub async fn seed_wishlist_items(
    api: &dyn StorefrontApi,
    registry: &EntityRegistry,
    records: &[WishlistItemRecord],
) -> StepReport {
    info!("starting wishlist product seeding");
    if records.is_empty() {
        info!("no wishlist product data to seed");
        return StepReport::empty(steps::WISHLIST_ITEMS, true);
    }

    let mut succeeded = 0;
    for record in records {
        let wishlist_id = registry.resolve(EntityKind::Wishlist, &record.wishlist_id);
        let product_id = registry.resolve(EntityKind::Product, &record.product_id);
        let (Some(wishlist_id), Some(product_id)) = (wishlist_id, product_id) else {
            warn!("skipping wishlist product - missing wishlist or product");
            continue;
        };

        let payload = json!({"productId": product_id});
        let path = format!("/api/wishlists/{wishlist_id}/add");
        match api.post(&path, &payload).await {
            Some(_) => {
                succeeded += 1;
                info!("added product to wishlist {}", wishlist_id);
            }
            None => error!("failed to add product to wishlist {}", wishlist_id),
        }
    }

    info!(
        "wishlist product seeding completed: {}/{} successful",
        succeeded,
        records.len()
    );
    StepReport::completed(steps::WISHLIST_ITEMS, records.len(), succeeded)
}
