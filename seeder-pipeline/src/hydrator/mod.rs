//! Pre-populates the registry from entities that already exist remotely.
//!
//! Hydration keys entries by natural name (`name` for brands, categories
//! and products, `username` for users) so a rerun of the seeders recognizes
//! rows that were created by a prior run and reuses their identifiers
//! instead of creating duplicates. Every failure here is soft: the run
//! proceeds with whatever was loaded.
use seeder_registry::EntityRegistry;
use seeder_shared::types::EntityKind;
use serde_json::Value;
use storefront_client::{StorefrontApi, envelope};
use tracing::{info, warn};

const PAGE: &str = "0";
const PAGE_SIZE: &str = "100";

/// Loads existing brands, categories, products and users into the registry.
pub async fn hydrate(api: &dyn StorefrontApi, registry: &mut EntityRegistry) {
    info!("loading existing entities from the backend");
    load_kind(api, registry, "/api/brands", EntityKind::Brand, "name", &[]).await;
    load_kind(api, registry, "/api/categories", EntityKind::Category, "name", &[]).await;
    load_kind(
        api,
        registry,
        "/api/products",
        EntityKind::Product,
        "name",
        &[("filter", "{}")],
    )
    .await;
    load_kind(
        api,
        registry,
        "/api/admin/users",
        EntityKind::User,
        "username",
        &[],
    )
    .await;
    info!("finished loading existing entities");
}

async fn load_kind(
    api: &dyn StorefrontApi,
    registry: &mut EntityRegistry,
    path: &str,
    kind: EntityKind,
    key_field: &str,
    extra: &[(&str, &str)],
) {
    let mut params: Vec<(String, String)> = vec![
        ("page".to_string(), PAGE.to_string()),
        ("size".to_string(), PAGE_SIZE.to_string()),
    ];
    params.extend(extra.iter().map(|(k, v)| (k.to_string(), v.to_string())));

    let Some(body) = api.get(path, &params).await else {
        warn!("could not load existing {}", kind);
        return;
    };
    let listing = match envelope::unwrap(body) {
        Ok(listing) => listing,
        Err(e) => {
            warn!("could not load existing {}: {}", kind, e);
            return;
        }
    };
    let Some(entries) = listing.as_array() else {
        warn!("unexpected listing shape for {}", kind);
        return;
    };

    let mut loaded = 0;
    for entry in entries {
        let key = entry.get(key_field).and_then(Value::as_str);
        let id = entry.get("id").and_then(entry_id);
        if let (Some(key), Some(id)) = (key, id) {
            registry.record(kind, key, id);
            loaded += 1;
        }
    }
    info!("loaded {} existing {}", loaded, kind);
}

fn entry_id(id: &Value) -> Option<String> {
    match id {
        Value::String(id) => Some(id.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
