use seeder_registry::EntityRegistry;
use seeder_shared::types::{EntityKind, StepReport, VariantRecord};
use serde_json::{Map, Value, json};
use storefront_client::StorefrontApi;
use tracing::{error, info, warn};

use super::{created_id, steps};

/// Seeds product variants.
///
/// The `attributeValues` CSV cell carries embedded JSON; a cell that does
/// not parse as an object degrades to an empty attribute map with a warning
/// rather than failing the record.
pub async fn seed_variants(
    api: &dyn StorefrontApi,
    registry: &mut EntityRegistry,
    records: &[VariantRecord],
) -> StepReport {
    info!("starting product variant seeding");
    if records.is_empty() {
        info!("no product variant data to seed");
        return StepReport::empty(steps::VARIANTS, true);
    }

    let mut succeeded = 0;
    for record in records {
        let Some(product_id) = registry
            .resolve(EntityKind::Product, &record.product_id)
            .map(str::to_owned)
        else {
            warn!(
                "skipping variant {} - product not found: {}",
                record.sku, record.product_id
            );
            continue;
        };

        let attribute_values = parse_attributes(record);
        let payload = json!({
            "productId": product_id,
            "attributeValues": attribute_values,
            "price": record.price,
            "stock": record.stock,
        });
        let path = format!("/api/products/{product_id}/variants");
        match api.post(&path, &payload).await.and_then(created_id) {
            Some(id) => {
                registry.record(EntityKind::Variant, record.id.clone(), id);
                succeeded += 1;
                info!("created variant: {}", record.sku);
            }
            None => error!("failed to create variant: {}", record.sku),
        }
    }

    info!(
        "product variant seeding completed: {}/{} successful",
        succeeded,
        records.len()
    );
    StepReport::completed(steps::VARIANTS, records.len(), succeeded)
}

fn parse_attributes(record: &VariantRecord) -> Map<String, Value> {
    match serde_json::from_str::<Value>(&record.attribute_values) {
        Ok(Value::Object(map)) => map,
        _ => {
            warn!("invalid attribute values for variant: {}", record.sku);
            Map::new()
        }
    }
}
