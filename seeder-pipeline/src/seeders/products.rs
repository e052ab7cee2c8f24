use seeder_registry::EntityRegistry;
use seeder_shared::types::{EntityKind, ProductRecord, StepReport};
use serde_json::json;
use storefront_client::StorefrontApi;
use tracing::{debug, error, info, warn};

use super::{created_id, steps};

/// Seeds products. Both the brand and the category reference must resolve
/// through the registry; a row missing either is skipped without a call.
pub async fn seed_products(
    api: &dyn StorefrontApi,
    registry: &mut EntityRegistry,
    records: &[ProductRecord],
) -> StepReport {
    info!("starting product seeding");
    if records.is_empty() {
        error!("no product data to seed");
        return StepReport::empty(steps::PRODUCTS, false);
    }

    let mut succeeded = 0;
    for record in records {
        if let Some(existing) = registry
            .resolve(EntityKind::Product, &record.name)
            .map(str::to_owned)
        {
            debug!("product {} already exists as {}", record.name, existing);
            registry.record(EntityKind::Product, record.id.clone(), existing);
            succeeded += 1;
            continue;
        }

        let brand_id = registry.resolve(EntityKind::Brand, &record.brand_id);
        let category_id = registry.resolve(EntityKind::Category, &record.category_id);
        let (Some(brand_id), Some(category_id)) = (brand_id, category_id) else {
            warn!(
                "skipping product {} - missing brand or category",
                record.name
            );
            continue;
        };

        let payload = json!({
            "name": record.name,
            "description": record.description,
            "sku": record.sku,
            "isActive": record.is_active,
            "isFeatured": record.is_featured,
            "price": record.price,
            "stock": record.stock,
            "brandId": brand_id,
            "categoryId": category_id,
        });
        match api
            .post("/api/products", &payload)
            .await
            .and_then(created_id)
        {
            Some(id) => {
                registry.record(EntityKind::Product, record.id.clone(), id.clone());
                registry.record(EntityKind::Product, record.name.clone(), id);
                succeeded += 1;
                info!("created product: {}", record.name);
            }
            None => error!("failed to create product: {}", record.name),
        }
    }

    info!(
        "product seeding completed: {}/{} successful",
        succeeded,
        records.len()
    );
    StepReport::completed(steps::PRODUCTS, records.len(), succeeded)
}
