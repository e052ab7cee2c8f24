use seeder_registry::EntityRegistry;
use seeder_shared::types::{BrandRecord, EntityKind, StepReport};
use serde_json::json;
use storefront_client::StorefrontApi;
use tracing::{debug, error, info};

use super::{created_id, steps};

/// Seeds brands. A brand whose name was hydrated from the backend is reused
/// instead of re-created, keeping reruns duplicate-free.
pub async fn seed_brands(
    api: &dyn StorefrontApi,
    registry: &mut EntityRegistry,
    records: &[BrandRecord],
) -> StepReport {
    info!("starting brand seeding");
    if records.is_empty() {
        error!("no brand data to seed");
        return StepReport::empty(steps::BRANDS, false);
    }

    let mut succeeded = 0;
    for record in records {
        if let Some(existing) = registry
            .resolve(EntityKind::Brand, &record.name)
            .map(str::to_owned)
        {
            debug!("brand {} already exists as {}", record.name, existing);
            registry.record(EntityKind::Brand, record.id.clone(), existing);
            succeeded += 1;
            continue;
        }

        let payload = json!({
            "name": record.name,
            "description": record.description,
            "website": record.website,
            "imageUrl": record.image_url,
        });
        match api.post("/api/brands", &payload).await.and_then(created_id) {
            Some(id) => {
                registry.record(EntityKind::Brand, record.id.clone(), id.clone());
                registry.record(EntityKind::Brand, record.name.clone(), id);
                succeeded += 1;
                info!("created brand: {}", record.name);
            }
            None => error!("failed to create brand: {}", record.name),
        }
    }

    info!(
        "brand seeding completed: {}/{} successful",
        succeeded,
        records.len()
    );
    StepReport::completed(steps::BRANDS, records.len(), succeeded)
}
