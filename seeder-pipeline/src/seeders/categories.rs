use seeder_registry::EntityRegistry;
use seeder_shared::types::{CategoryRecord, EntityKind, StepReport};
use serde_json::json;
use storefront_client::StorefrontApi;
use tracing::{debug, error, info, warn};

use super::{created_id, steps};

/// Seeds the category hierarchy in two passes.
///
/// All root categories are created first so that the second pass can
/// resolve every child's `parent` reference against the registry. A child
/// whose parent is still missing after the first pass is skipped with a
/// warning; it is never deferred or retried within the run.
pub async fn seed_categories(
    api: &dyn StorefrontApi,
    registry: &mut EntityRegistry,
    records: &[CategoryRecord],
) -> StepReport {
    info!("starting category seeding");
    if records.is_empty() {
        error!("no category data to seed");
        return StepReport::empty(steps::CATEGORIES, false);
    }

    let mut succeeded = 0;
    for record in records.iter().filter(|record| record.is_root()) {
        if create_category(api, registry, record, None).await {
            succeeded += 1;
        }
    }

    for record in records.iter().filter(|record| !record.is_root()) {
        let parent_key = record.parent.as_deref().unwrap_or_default();
        let Some(parent_id) = registry
            .resolve(EntityKind::Category, parent_key)
            .map(str::to_owned)
        else {
            warn!("parent category not found for: {}", record.name);
            continue;
        };
        if create_category(api, registry, record, Some(parent_id)).await {
            succeeded += 1;
        }
    }

    info!(
        "category seeding completed: {}/{} successful",
        succeeded,
        records.len()
    );
    StepReport::completed(steps::CATEGORIES, records.len(), succeeded)
}

async fn create_category(
    api: &dyn StorefrontApi,
    registry: &mut EntityRegistry,
    record: &CategoryRecord,
    parent_id: Option<String>,
) -> bool {
    if let Some(existing) = registry
        .resolve(EntityKind::Category, &record.name)
        .map(str::to_owned)
    {
        debug!("category {} already exists as {}", record.name, existing);
        registry.record(EntityKind::Category, record.id.clone(), existing);
        return true;
    }

    let mut payload = json!({
        "name": record.name,
        "description": record.description,
        "imageUrl": record.image_url,
    });
    if let Some(parent_id) = parent_id {
        payload["parent"] = json!(parent_id);
    }

    match api
        .post("/api/categories", &payload)
        .await
        .and_then(created_id)
    {
        Some(id) => {
            registry.record(EntityKind::Category, record.id.clone(), id.clone());
            registry.record(EntityKind::Category, record.name.clone(), id);
            info!("created category: {}", record.name);
            true
        }
        None => {
            error!("failed to create category: {}", record.name);
            false
        }
    }
}
