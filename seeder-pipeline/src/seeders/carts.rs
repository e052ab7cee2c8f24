use seeder_registry::EntityRegistry;
use seeder_shared::types::{CartItemRecord, CartRecord, EntityKind, StepReport};
use serde_json::json;
use storefront_client::StorefrontApi;
use tracing::{debug, error, info, warn};

use super::steps;

/// Seeds shopping carts.
///
/// The backend creates one cart per user at registration, so no creation
/// call is issued; each row only records the source cart id against the
/// owning user's target id so later rows can still be gated on it.
pub fn seed_carts(registry: &mut EntityRegistry, records: &[CartRecord]) -> StepReport {
    info!("starting shopping cart seeding");
    if records.is_empty() {
        info!("no shopping cart data to seed");
        return StepReport::empty(steps::CARTS, true);
    }

    let mut succeeded = 0;
    for record in records {
        let Some(user_id) = registry
            .resolve(EntityKind::User, &record.user_id)
            .map(str::to_owned)
        else {
            warn!("skipping cart - user not found: {}", record.user_id);
            continue;
        };
        registry.record(EntityKind::Cart, record.id.clone(), user_id.clone());
        succeeded += 1;
        info!("noted cart for user: {}", user_id);
    }

    info!(
        "shopping cart seeding completed: {}/{} successful",
        succeeded,
        records.len()
    );
    StepReport::completed(steps::CARTS, records.len(), succeeded)
}

/// Adds items to the session user's cart.
///
/// The variant reference is optional; an unresolvable variant is dropped
/// from the payload (the item still ships against the base product).
pub async fn seed_cart_items(
    api: &dyn StorefrontApi,
    registry: &EntityRegistry,
    records: &[CartItemRecord],
) -> StepReport {
    info!("starting cart item seeding");
    if records.is_empty() {
        info!("no cart item data to seed");
        return StepReport::empty(steps::CART_ITEMS, true);
    }

    let mut succeeded = 0;
    for record in records {
        let Some(product_id) = registry.resolve(EntityKind::Product, &record.product_id) else {
            warn!("skipping cart item - product not found");
            continue;
        };
        let variant_id = record
            .variant_id
            .as_deref()
            .filter(|variant| !variant.is_empty())
            .and_then(|variant| registry.resolve(EntityKind::Variant, variant));

        let mut payload = json!({
            "productId": product_id,
            "quantity": record.quantity,
        });
        if let Some(variant_id) = variant_id {
            payload["variantId"] = json!(variant_id);
        } else if record.variant_id.is_some() {
            debug!("cart item variant not resolved, keeping base product");
        }

        match api.post("/api/cart/items", &payload).await {
            Some(_) => {
                succeeded += 1;
                info!("added item to cart");
            }
            None => error!("failed to add item to cart"),
        }
    }

    info!(
        "cart item seeding completed: {}/{} successful",
        succeeded,
        records.len()
    );
    StepReport::completed(steps::CART_ITEMS, records.len(), succeeded)
}
