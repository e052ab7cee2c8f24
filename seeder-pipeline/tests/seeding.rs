use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use seeder_pipeline::hydrator;
use seeder_pipeline::ledger::RunLedger;
use seeder_pipeline::orchestrator::{Orchestrator, SeedData};
use seeder_pipeline::seeders;
use seeder_registry::EntityRegistry;
use seeder_shared::types::{
    BrandRecord, CategoryRecord, OrderItemRecord, OrderRecord, ProductRecord, UserRecord,
};
use serde_json::{Value, json};
use storefront_client::{ClientError, DryRunClient, Method, StorefrontApi};

#[derive(Debug, Clone, PartialEq)]
struct RecordedCall {
    method: Method,
    path: String,
    body: Option<Value>,
}

/// Scripted backend double: answers every write with a fresh `srv-NNN` id,
/// answers reads from pre-configured pages (empty otherwise), and records
/// every call for assertions.
#[derive(Default)]
struct ScriptedApi {
    calls: Mutex<Vec<RecordedCall>>,
    pages: HashMap<String, Value>,
    counter: AtomicU64,
}

impl ScriptedApi {
    fn new() -> Self {
        Self::default()
    }

    fn with_page(mut self, path: &str, page: Value) -> Self {
        self.pages.insert(path.to_string(), page);
        self
    }

    fn writes(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| call.method == Method::POST || call.method == Method::PUT)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl StorefrontApi for ScriptedApi {
    async fn authenticate(&self) -> Result<(), ClientError> {
        Ok(())
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        _params: Option<&[(String, String)]>,
    ) -> Option<Value> {
        self.calls.lock().unwrap().push(RecordedCall {
            method: method.clone(),
            path: path.to_string(),
            body: body.cloned(),
        });
        if method == Method::GET {
            return Some(
                self.pages
                    .get(path)
                    .cloned()
                    .unwrap_or_else(|| json!({"content": []})),
            );
        }
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        Some(json!({"id": format!("srv-{n:03}")}))
    }
}

fn user(id: &str, username: &str) -> UserRecord {
    UserRecord {
        id: id.to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: format!("{username}@example.com"),
        username: username.to_string(),
        role: "USER".to_string(),
    }
}

fn brand(id: &str, name: &str) -> BrandRecord {
    BrandRecord {
        id: id.to_string(),
        name: name.to_string(),
        description: "desc".to_string(),
        website: "https://example.com".to_string(),
        image_url: "https://example.com/logo.png".to_string(),
    }
}

fn category(id: &str, name: &str, parent: Option<&str>) -> CategoryRecord {
    CategoryRecord {
        id: id.to_string(),
        name: name.to_string(),
        description: "desc".to_string(),
        image_url: "img".to_string(),
        parent: parent.map(str::to_string),
    }
}

fn product(id: &str, name: &str, brand_id: &str, category_id: &str) -> ProductRecord {
    ProductRecord {
        id: id.to_string(),
        name: name.to_string(),
        description: "desc".to_string(),
        sku: format!("SKU-{id}"),
        is_active: true,
        is_featured: false,
        price: 19.99,
        stock: 5,
        brand_id: brand_id.to_string(),
        category_id: category_id.to_string(),
    }
}

#[tokio::test]
async fn missing_dependency_means_zero_remote_calls_for_the_record() {
    let api = ScriptedApi::new();
    let mut registry = EntityRegistry::new();
    // Category resolves, brand does not.
    registry.record(seeder_shared::types::EntityKind::Category, "c-1", "cat-target");

    let records = [product("p-1", "Compact Speaker", "b-missing", "c-1")];
    let report = seeders::seed_products(&api, &mut registry, &records).await;

    assert!(api.writes().is_empty());
    assert_eq!(report.attempted, 1);
    assert_eq!(report.succeeded, 0);
    assert!(!report.ok);
}

#[tokio::test]
async fn root_categories_are_created_before_children_regardless_of_row_order() {
    let api = ScriptedApi::new();
    let mut registry = EntityRegistry::new();

    // Child listed first; the root pass must still run first.
    let records = [
        category("Phones", "Phones", Some("Electronics")),
        category("Electronics", "Electronics", None),
    ];
    let report = seeders::seed_categories(&api, &mut registry, &records).await;

    let writes = api.writes();
    assert_eq!(writes.len(), 2);
    assert_eq!(writes[0].body.as_ref().unwrap()["name"], json!("Electronics"));
    assert!(writes[0].body.as_ref().unwrap().get("parent").is_none());
    assert_eq!(writes[1].body.as_ref().unwrap()["name"], json!("Phones"));
    // The child's parent is the id the backend assigned to the root.
    assert_eq!(writes[1].body.as_ref().unwrap()["parent"], json!("srv-001"));

    assert_eq!(report.succeeded, 2);
    assert_eq!(registry.len(seeder_shared::types::EntityKind::Category), 2);
}

#[tokio::test]
async fn orphan_child_category_is_skipped_with_no_call() {
    let api = ScriptedApi::new();
    let mut registry = EntityRegistry::new();

    let records = [category("Phones", "Phones", Some("Nonexistent"))];
    let report = seeders::seed_categories(&api, &mut registry, &records).await;

    assert!(api.writes().is_empty());
    assert_eq!(report.succeeded, 0);
}

#[tokio::test]
async fn successful_creation_registers_the_assigned_id() {
    let api = ScriptedApi::new();
    let mut registry = EntityRegistry::new();

    let records = [brand("b-1", "Acme")];
    let report = seeders::seed_brands(&api, &mut registry, &records).await;

    assert!(report.ok);
    assert_eq!(
        registry.resolve(seeder_shared::types::EntityKind::Brand, "b-1"),
        Some("srv-001")
    );
}

#[tokio::test]
async fn hydrated_rerun_creates_zero_duplicates() {
    let api = ScriptedApi::new()
        .with_page(
            "/api/brands",
            json!({"content": [{"id": "existing-1", "name": "Acme"}]}),
        )
        .with_page(
            "/api/categories",
            json!({"content": [{"id": "existing-2", "name": "Electronics"}]}),
        );
    let mut registry = EntityRegistry::new();
    hydrator::hydrate(&api, &mut registry).await;

    let brand_report = seeders::seed_brands(&api, &mut registry, &[brand("b-1", "Acme")]).await;
    let category_report = seeders::seed_categories(
        &api,
        &mut registry,
        &[category("c-1", "Electronics", None)],
    )
    .await;

    assert!(api.writes().is_empty());
    assert!(brand_report.ok);
    assert!(category_report.ok);
    // Source keys resolve to the pre-existing backend ids.
    assert_eq!(
        registry.resolve(seeder_shared::types::EntityKind::Brand, "b-1"),
        Some("existing-1")
    );
    assert_eq!(
        registry.resolve(seeder_shared::types::EntityKind::Category, "c-1"),
        Some("existing-2")
    );
}

#[tokio::test]
async fn dry_run_resolves_dependent_steps_with_deterministic_ids() {
    for _ in 0..2 {
        let api = DryRunClient::new();
        let mut registry = EntityRegistry::new();

        seeders::seed_brands(&api, &mut registry, &[brand("b-1", "Acme")]).await;
        seeders::seed_categories(&api, &mut registry, &[category("c-1", "Electronics", None)])
            .await;
        let report = seeders::seed_products(
            &api,
            &mut registry,
            &[product("p-1", "Compact Speaker", "b-1", "c-1")],
        )
        .await;

        assert!(report.ok);
        assert_eq!(
            registry.resolve(seeder_shared::types::EntityKind::Brand, "b-1"),
            Some("dry-000001")
        );
        assert_eq!(
            registry.resolve(seeder_shared::types::EntityKind::Product, "p-1"),
            Some("dry-000003")
        );
    }
}

#[tokio::test]
async fn order_items_attach_in_one_grouped_update() {
    let api = ScriptedApi::new();
    let mut registry = EntityRegistry::new();
    registry.record(seeder_shared::types::EntityKind::User, "u-1", "user-target");
    registry.record(seeder_shared::types::EntityKind::Product, "p-1", "prod-1");
    registry.record(seeder_shared::types::EntityKind::Product, "p-2", "prod-2");

    let orders = [OrderRecord {
        id: "o-1".to_string(),
        user_id: "u-1".to_string(),
        shipping_address: "1 Main St".to_string(),
        billing_address: "1 Main St".to_string(),
        payment_method: "CARD".to_string(),
        order_notes: None,
    }];
    seeders::seed_orders(&api, &mut registry, &orders).await;

    let items = [
        OrderItemRecord {
            order_id: "o-1".to_string(),
            product_id: "p-1".to_string(),
            variant_id: None,
            quantity: 2,
        },
        OrderItemRecord {
            order_id: "o-1".to_string(),
            product_id: "p-2".to_string(),
            variant_id: None,
            quantity: 1,
        },
    ];
    let report = seeders::seed_order_items(&api, &registry, &items).await;

    let writes = api.writes();
    // One POST for the shell, one PUT carrying both items.
    assert_eq!(writes.len(), 2);
    assert_eq!(writes[0].method, Method::POST);
    assert_eq!(writes[0].path, "/api/orders");
    assert_eq!(writes[0].body.as_ref().unwrap()["items"], json!([]));
    assert_eq!(writes[1].method, Method::PUT);
    assert_eq!(writes[1].path, "/api/orders/srv-001");
    assert_eq!(
        writes[1].body.as_ref().unwrap()["items"]
            .as_array()
            .unwrap()
            .len(),
        2
    );
    assert_eq!(report.succeeded, 2);
}

#[tokio::test]
async fn orchestrator_attempts_every_step_and_reports_per_step_outcomes() {
    let api = Arc::new(ScriptedApi::new());
    let mut data = SeedData::empty();
    data.users = Ok(vec![user("u-1", "ada")]);
    data.brands = Ok(vec![brand("b-1", "Acme")]);
    data.categories = Ok(vec![
        category("Electronics", "Electronics", None),
        category("Phones", "Phones", Some("Electronics")),
    ]);
    // The product references a brand that is not in brands.csv.
    data.products = Ok(vec![product("p-1", "Compact Speaker", "b-missing", "Electronics")]);

    let orchestrator = Orchestrator::new(
        api.clone(),
        EntityRegistry::new(),
        RunLedger::disabled(),
        data,
    );
    let summary = orchestrator.run().await.unwrap();

    // Every step was attempted even though products failed.
    assert_eq!(summary.steps.len(), 14);
    let products = summary
        .steps
        .iter()
        .find(|step| step.name == "products")
        .unwrap();
    assert!(!products.ok);
    assert_eq!(products.succeeded, 0);
    let categories = summary
        .steps
        .iter()
        .find(|step| step.name == "categories")
        .unwrap();
    assert!(categories.ok);
    assert!(!summary.is_success());
    // The failing product row issued no write.
    assert!(
        !api.writes()
            .iter()
            .any(|call| call.path == "/api/products")
    );
}

#[tokio::test]
async fn ledger_completed_steps_are_skipped_on_resume() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.json");
    {
        let mut ledger = RunLedger::load(&path).unwrap();
        ledger.mark_complete("users").unwrap();
    }

    let api = Arc::new(ScriptedApi::new());
    let mut data = SeedData::empty();
    data.users = Ok(vec![user("u-1", "ada")]);
    data.brands = Ok(vec![brand("b-1", "Acme")]);
    data.categories = Ok(vec![category("c-1", "Electronics", None)]);
    data.products = Ok(vec![product("p-1", "Compact Speaker", "b-1", "c-1")]);

    let orchestrator = Orchestrator::new(
        api.clone(),
        EntityRegistry::new(),
        RunLedger::load(&path).unwrap(),
        data,
    );
    let summary = orchestrator.run().await.unwrap();

    let users = summary
        .steps
        .iter()
        .find(|step| step.name == "users")
        .unwrap();
    assert!(users.skipped);
    assert!(users.ok);
    assert!(
        !api.writes()
            .iter()
            .any(|call| call.path == "/api/auth/register")
    );

    // Successful steps were appended to the ledger for the next resume.
    let reloaded = RunLedger::load(&path).unwrap();
    assert!(reloaded.is_complete("brands"));
    assert!(reloaded.is_complete("products"));
}
