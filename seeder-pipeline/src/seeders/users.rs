use seeder_registry::EntityRegistry;
use seeder_shared::types::{EntityKind, StepReport, UserRecord};
use serde_json::json;
use storefront_client::StorefrontApi;
use tracing::{debug, error, info};

use super::{created_id, steps};

/// Every seeded account gets the same password, matching the backend's
/// development fixtures.
const DEFAULT_PASSWORD: &str = "password";

/// Seeds users through the registration endpoint.
///
/// Registry entries are recorded under both the CSV source key and the
/// username, so hydrated reruns and username-keyed references both resolve.
pub async fn seed_users(
    api: &dyn StorefrontApi,
    registry: &mut EntityRegistry,
    records: &[UserRecord],
) -> StepReport {
    info!("starting user seeding");
    if records.is_empty() {
        error!("no user data to seed");
        return StepReport::empty(steps::USERS, false);
    }

    let mut succeeded = 0;
    for record in records {
        if let Some(existing) = registry
            .resolve(EntityKind::User, &record.username)
            .map(str::to_owned)
        {
            debug!("user {} already exists as {}", record.username, existing);
            registry.record(EntityKind::User, record.id.clone(), existing);
            succeeded += 1;
            continue;
        }

        let payload = json!({
            "firstName": record.first_name,
            "lastName": record.last_name,
            "email": record.email,
            "username": record.username,
            "password": DEFAULT_PASSWORD,
            "role": record.role,
        });
        match api
            .post("/api/auth/register", &payload)
            .await
            .and_then(created_id)
        {
            Some(id) => {
                registry.record(EntityKind::User, record.id.clone(), id.clone());
                registry.record(EntityKind::User, record.username.clone(), id);
                succeeded += 1;
                info!("created user: {}", record.username);
            }
            None => error!("failed to create user: {}", record.username),
        }
    }

    info!(
        "user seeding completed: {}/{} successful",
        succeeded,
        records.len()
    );
    StepReport::completed(steps::USERS, records.len(), succeeded)
}
