use seeder_registry::EntityRegistry;
use seeder_shared::types::{EntityKind, ProductImageRecord, StepReport, VariantImageRecord};
use serde_json::json;
use storefront_client::StorefrontApi;
use tracing::{error, info, warn};

use super::steps;

/// Seeds product images. Nothing downstream depends on image identifiers,
/// so successes are only counted, not registered.
pub async fn seed_product_images(
    api: &dyn StorefrontApi,
    registry: &EntityRegistry,
    records: &[ProductImageRecord],
) -> StepReport {
    info!("starting product image seeding");
    if records.is_empty() {
        info!("no product image data to seed");
        return StepReport::empty(steps::PRODUCT_IMAGES, true);
    }

    let mut succeeded = 0;
    for record in records {
        let Some(product_id) = registry.resolve(EntityKind::Product, &record.product_id) else {
            warn!(
                "skipping image - product not found: {}",
                record.product_id
            );
            continue;
        };

        let payload = json!({
            "imageUrl": record.image_url,
            "altText": record.alt_text,
            "sortOrder": record.sort_order.unwrap_or(0),
        });
        let path = format!("/api/products/{product_id}/images");
        match api.post(&path, &payload).await {
            Some(_) => {
                succeeded += 1;
                info!("attached image to product {}", product_id);
            }
            None => error!("failed to attach image to product {}", product_id),
        }
    }

    info!(
        "product image seeding completed: {}/{} successful",
        succeeded,
        records.len()
    );
    StepReport::completed(steps::PRODUCT_IMAGES, records.len(), succeeded)
}

/// Seeds variant images, resolved through the variant registry partition.
pub async fn seed_variant_images(
    api: &dyn StorefrontApi,
    registry: &EntityRegistry,
    records: &[VariantImageRecord],
) -> StepReport {
    info!("starting variant image seeding");
    if records.is_empty() {
        info!("no variant image data to seed");
        return StepReport::empty(steps::VARIANT_IMAGES, true);
    }

    let mut succeeded = 0;
    for record in records {
        let Some(variant_id) = registry.resolve(EntityKind::Variant, &record.variant_id) else {
            warn!(
                "skipping variant image - variant not found: {}",
                record.variant_id
            );
            continue;
        };

        let payload = json!({
            "imageUrl": record.image_url,
            "altText": record.alt_text,
            "sortOrder": record.sort_order.unwrap_or(0),
        });
        let path = format!("/api/products/variants/{variant_id}/images");
        match api.post(&path, &payload).await {
            Some(_) => {
                succeeded += 1;
                info!("attached image to variant {}", variant_id);
            }
            None => error!("failed to attach image to variant {}", variant_id),
        }
    }

    info!(
        "variant image seeding completed: {}/{} successful",
        succeeded,
        records.len()
    );
    StepReport::completed(steps::VARIANT_IMAGES, records.len(), succeeded)
}
