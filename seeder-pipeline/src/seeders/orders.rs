use std::collections::BTreeMap;

use seeder_registry::EntityRegistry;
use seeder_shared::types::{EntityKind, OrderItemRecord, OrderRecord, StepReport};
use serde_json::{Value, json};
use storefront_client::StorefrontApi;
use tracing::{error, info, warn};

use super::{created_id, steps};

/// Seeds order shells.
///
/// Orders are composite: this step creates the shell with an empty item
/// list; `seed_order_items` attaches the grouped line items afterwards with
/// an update call.
pub async fn seed_orders(
    api: &dyn StorefrontApi,
    registry: &mut EntityRegistry,
    records: &[OrderRecord],
) -> StepReport {
    info!("starting order seeding");
    if records.is_empty() {
        info!("no order data to seed");
        return StepReport::empty(steps::ORDERS, true);
    }

    let mut succeeded = 0;
    for record in records {
        if !registry.contains(EntityKind::User, &record.user_id) {
            warn!("skipping order - user not found: {}", record.user_id);
            continue;
        }

        let payload = json!({
            "shippingAddress": record.shipping_address,
            "billingAddress": record.billing_address,
            "paymentMethod": record.payment_method,
            "orderNotes": record.order_notes.clone().unwrap_or_default(),
            "fromCart": false,
            "items": [],
        });
        match api.post("/api/orders", &payload).await.and_then(created_id) {
            Some(id) => {
                registry.record(EntityKind::Order, record.id.clone(), id);
                succeeded += 1;
                info!("created order: {}", record.id);
            }
            None => error!("failed to create order: {}", record.id),
        }
    }

    info!(
        "order seeding completed: {}/{} successful",
        succeeded,
        records.len()
    );
    StepReport::completed(steps::ORDERS, records.len(), succeeded)
}

/// Attaches line items to seeded orders.
///
/// Rows are grouped by their source order id; each group resolves its
/// product (required) and variant (optional) references, then a single
/// update call carries the whole group. The success count tallies items,
/// not groups.
pub async fn seed_order_items(
    api: &dyn StorefrontApi,
    registry: &EntityRegistry,
    records: &[OrderItemRecord],
) -> StepReport {
    info!("starting order item seeding");
    if records.is_empty() {
        info!("no order item data to seed");
        return StepReport::empty(steps::ORDER_ITEMS, true);
    }

    let mut groups: BTreeMap<&str, Vec<&OrderItemRecord>> = BTreeMap::new();
    for record in records {
        groups.entry(record.order_id.as_str()).or_default().push(record);
    }

    let mut succeeded = 0;
    for (order_key, items) in groups {
        let Some(order_id) = registry.resolve(EntityKind::Order, order_key) else {
            warn!("skipping order items - order not found: {}", order_key);
            continue;
        };

        let mut line_items: Vec<Value> = Vec::with_capacity(items.len());
        for item in items {
            let Some(product_id) = registry.resolve(EntityKind::Product, &item.product_id) else {
                warn!("skipping order item - product not found");
                continue;
            };
            let variant_id = item
                .variant_id
                .as_deref()
                .filter(|variant| !variant.is_empty())
                .and_then(|variant| registry.resolve(EntityKind::Variant, variant));

            let mut line_item = json!({
                "productId": product_id,
                "quantity": item.quantity,
            });
            if let Some(variant_id) = variant_id {
                line_item["variantId"] = json!(variant_id);
            }
            line_items.push(line_item);
        }
        if line_items.is_empty() {
            continue;
        }

        let count = line_items.len();
        let path = format!("/api/orders/{order_id}");
        match api.put(&path, &json!({"items": line_items})).await {
            Some(_) => {
                succeeded += count;
                info!("added {} items to order {}", count, order_id);
            }
            None => error!("failed to add items to order {}", order_id),
        }
    }

    info!("order item seeding completed: {} items processed", succeeded);
    StepReport::completed(steps::ORDER_ITEMS, records.len(), succeeded)
}
