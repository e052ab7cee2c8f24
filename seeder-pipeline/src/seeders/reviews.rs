use seeder_registry::EntityRegistry;
use seeder_shared::types::{EntityKind, ReviewRecord, StepReport};
use serde_json::json;
use storefront_client::StorefrontApi;
use tracing::{error, info, warn};

use super::steps;

/// Seeds reviews. Both the product and the author must resolve; review
/// identifiers are not registered because nothing references them.
pub async fn seed_reviews(
    api: &dyn StorefrontApi,
    registry: &EntityRegistry,
    records: &[ReviewRecord],
) -> StepReport {
    info!("starting review seeding");
    if records.is_empty() {
        info!("no review data to seed");
        return StepReport::empty(steps::REVIEWS, true);
    }

    let mut succeeded = 0;
    for record in records {
        let product_id = registry.resolve(EntityKind::Product, &record.product_id);
        let user_id = registry.resolve(EntityKind::User, &record.user_id);
        let (Some(product_id), Some(user_id)) = (product_id, user_id) else {
            warn!("skipping review - missing product or user");
            continue;
        };

        let payload = json!({
            "productId": product_id,
            "userId": user_id,
            "rating": record.rating,
            "title": record.title,
            "comment": record.comment,
        });
        match api.post("/api/review/review/create", &payload).await {
            Some(_) => {
                succeeded += 1;
                info!("created review for product {}", product_id);
            }
            None => error!("failed to create review"),
        }
    }

    info!(
        "review seeding completed: {}/{} successful",
        succeeded,
        records.len()
    );
    StepReport::completed(steps::REVIEWS, records.len(), succeeded)
}
