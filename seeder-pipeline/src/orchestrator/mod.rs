//! This module defines the `Orchestrator` responsible for driving the
//! seeding steps in dependency order.
//! It authenticates the session, hydrates the registry from existing remote
//! entities, then attempts every step in sequence. There is no circuit
//! breaker; a failed step does not block later independent steps, and
//! dependent steps degrade gracefully through registry misses.
use std::sync::Arc;

use seeder_registry::EntityRegistry;
use seeder_shared::types::{
    BrandRecord, CartItemRecord, CartRecord, CategoryRecord, OrderItemRecord, OrderRecord,
    ProductImageRecord, ProductRecord, ReviewRecord, RunSummary, StepReport, UserRecord,
    VariantImageRecord, VariantRecord, WishlistItemRecord, WishlistRecord,
};
use storefront_client::StorefrontApi;
use tracing::{error, info, warn};

use crate::errors::{OrchestratorError, SourceError};
use crate::generator::SyntheticData;
use crate::hydrator;
use crate::ledger::RunLedger;
use crate::seeders::{self, steps};
use crate::source::CsvSource;

/// Row data for one step: the parsed records, or the source error that
/// fails the step without attempting any rows.
pub type Rows<T> = Result<Vec<T>, SourceError>;

/// All input rows for a run, one field per step, loaded up front.
pub struct SeedData {
    pub users: Rows<UserRecord>,
    pub brands: Rows<BrandRecord>,
    pub categories: Rows<CategoryRecord>,
    pub products: Rows<ProductRecord>,
    pub variants: Rows<VariantRecord>,
    pub product_images: Rows<ProductImageRecord>,
    pub variant_images: Rows<VariantImageRecord>,
    pub reviews: Rows<ReviewRecord>,
    pub wishlists: Rows<WishlistRecord>,
    pub wishlist_items: Rows<WishlistItemRecord>,
    pub carts: Rows<CartRecord>,
    pub cart_items: Rows<CartItemRecord>,
    pub orders: Rows<OrderRecord>,
    pub order_items: Rows<OrderItemRecord>,
}

impl SeedData {
    /// Loads every per-kind CSV file from the folder. Missing files load as
    /// zero rows; unreadable files surface as that step's failure.
    pub fn from_csv(source: &CsvSource) -> Self {
        SeedData {
            users: source.load("users.csv"),
            brands: source.load("brands.csv"),
            categories: source.load("categories.csv"),
            products: source.load("products.csv"),
            variants: source.load("product_variants.csv"),
            product_images: source.load("product_images.csv"),
            variant_images: source.load("variant_images.csv"),
            reviews: source.load("reviews.csv"),
            wishlists: source.load("wishlists.csv"),
            wishlist_items: source.load("wishlist_products.csv"),
            carts: source.load("shopping_carts.csv"),
            cart_items: source.load("cart_items.csv"),
            orders: source.load("orders.csv"),
            order_items: source.load("order_items.csv"),
        }
    }

    /// Wraps generated records; kinds the generator does not produce run
    /// with zero rows.
    pub fn from_generated(data: SyntheticData) -> Self {
        SeedData {
            users: Ok(data.users),
            brands: Ok(data.brands),
            categories: Ok(data.categories),
            products: Ok(data.products),
            ..SeedData::empty()
        }
    }

    pub fn empty() -> Self {
        SeedData {
            users: Ok(Vec::new()),
            brands: Ok(Vec::new()),
            categories: Ok(Vec::new()),
            products: Ok(Vec::new()),
            variants: Ok(Vec::new()),
            product_images: Ok(Vec::new()),
            variant_images: Ok(Vec::new()),
            reviews: Ok(Vec::new()),
            wishlists: Ok(Vec::new()),
            wishlist_items: Ok(Vec::new()),
            carts: Ok(Vec::new()),
            cart_items: Ok(Vec::new()),
            orders: Ok(Vec::new()),
            order_items: Ok(Vec::new()),
        }
    }
}

/// `Orchestrator` drives a full seeding run against one backend session.
pub struct Orchestrator {
    api: Arc<dyn StorefrontApi>,
    registry: EntityRegistry,
    ledger: RunLedger,
    data: SeedData,
}

impl Orchestrator {
    pub fn new(
        api: Arc<dyn StorefrontApi>,
        registry: EntityRegistry,
        ledger: RunLedger,
        data: SeedData,
    ) -> Self {
        Self {
            api,
            registry,
            ledger,
            data,
        }
    }

    /// Runs the full pipeline and returns the per-step summary.
    ///
    /// Authentication failure is the only fatal error; every step after it
    /// is attempted unconditionally, in declared dependency order.
    pub async fn run(mut self) -> Result<RunSummary, OrchestratorError> {
        info!("starting seeding run");
        self.api.authenticate().await?;
        hydrator::hydrate(self.api.as_ref(), &mut self.registry).await;

        let mut summary = RunSummary::default();

        // Roots.
        if let Some(records) = ready_step(&mut summary, &self.ledger, steps::USERS, &self.data.users)
        {
            let report = seeders::seed_users(self.api.as_ref(), &mut self.registry, records).await;
            finish_step(&mut self.ledger, &mut summary, report);
        }
        if let Some(records) =
            ready_step(&mut summary, &self.ledger, steps::BRANDS, &self.data.brands)
        {
            let report = seeders::seed_brands(self.api.as_ref(), &mut self.registry, records).await;
            finish_step(&mut self.ledger, &mut summary, report);
        }
        if let Some(records) = ready_step(
            &mut summary,
            &self.ledger,
            steps::CATEGORIES,
            &self.data.categories,
        ) {
            let report =
                seeders::seed_categories(self.api.as_ref(), &mut self.registry, records).await;
            finish_step(&mut self.ledger, &mut summary, report);
        }

        // Derived.
        if let Some(records) = ready_step(
            &mut summary,
            &self.ledger,
            steps::PRODUCTS,
            &self.data.products,
        ) {
            let report =
                seeders::seed_products(self.api.as_ref(), &mut self.registry, records).await;
            finish_step(&mut self.ledger, &mut summary, report);
        }

        // Leaves.
        if let Some(records) = ready_step(
            &mut summary,
            &self.ledger,
            steps::VARIANTS,
            &self.data.variants,
        ) {
            let report =
                seeders::seed_variants(self.api.as_ref(), &mut self.registry, records).await;
            finish_step(&mut self.ledger, &mut summary, report);
        }
        if let Some(records) = ready_step(
            &mut summary,
            &self.ledger,
            steps::PRODUCT_IMAGES,
            &self.data.product_images,
        ) {
            let report =
                seeders::seed_product_images(self.api.as_ref(), &self.registry, records).await;
            finish_step(&mut self.ledger, &mut summary, report);
        }
        if let Some(records) = ready_step(
            &mut summary,
            &self.ledger,
            steps::VARIANT_IMAGES,
            &self.data.variant_images,
        ) {
            let report =
                seeders::seed_variant_images(self.api.as_ref(), &self.registry, records).await;
            finish_step(&mut self.ledger, &mut summary, report);
        }
        if let Some(records) = ready_step(
            &mut summary,
            &self.ledger,
            steps::REVIEWS,
            &self.data.reviews,
        ) {
            let report = seeders::seed_reviews(self.api.as_ref(), &self.registry, records).await;
            finish_step(&mut self.ledger, &mut summary, report);
        }

        // Containers.
        if let Some(records) = ready_step(
            &mut summary,
            &self.ledger,
            steps::WISHLISTS,
            &self.data.wishlists,
        ) {
            let report =
                seeders::seed_wishlists(self.api.as_ref(), &mut self.registry, records).await;
            finish_step(&mut self.ledger, &mut summary, report);
        }
        if let Some(records) = ready_step(
            &mut summary,
            &self.ledger,
            steps::WISHLIST_ITEMS,
            &self.data.wishlist_items,
        ) {
            let report =
                seeders::seed_wishlist_items(self.api.as_ref(), &self.registry, records).await;
            finish_step(&mut self.ledger, &mut summary, report);
        }
        if let Some(records) =
            ready_step(&mut summary, &self.ledger, steps::CARTS, &self.data.carts)
        {
            let report = seeders::seed_carts(&mut self.registry, records);
            finish_step(&mut self.ledger, &mut summary, report);
        }
        if let Some(records) = ready_step(
            &mut summary,
            &self.ledger,
            steps::CART_ITEMS,
            &self.data.cart_items,
        ) {
            let report = seeders::seed_cart_items(self.api.as_ref(), &self.registry, records).await;
            finish_step(&mut self.ledger, &mut summary, report);
        }
        if let Some(records) = ready_step(
            &mut summary,
            &self.ledger,
            steps::ORDERS,
            &self.data.orders,
        ) {
            let report = seeders::seed_orders(self.api.as_ref(), &mut self.registry, records).await;
            finish_step(&mut self.ledger, &mut summary, report);
        }
        if let Some(records) = ready_step(
            &mut summary,
            &self.ledger,
            steps::ORDER_ITEMS,
            &self.data.order_items,
        ) {
            let report =
                seeders::seed_order_items(self.api.as_ref(), &self.registry, records).await;
            finish_step(&mut self.ledger, &mut summary, report);
        }

        info!(
            "seeding run completed: {}/{} steps successful",
            summary.succeeded_steps(),
            summary.steps.len()
        );
        Ok(summary)
    }
}

/// Gatekeeper for one step: resolves the ledger skip and the source error
/// cases, pushing their reports directly; returns the rows when the step
/// should actually run.
fn ready_step<'a, T>(
    summary: &mut RunSummary,
    ledger: &RunLedger,
    step: &'static str,
    rows: &'a Rows<T>,
) -> Option<&'a [T]> {
    if ledger.is_complete(step) {
        info!("skipping step {} - already complete in ledger", step);
        summary.push(StepReport::skipped(step));
        return None;
    }
    match rows {
        Ok(records) => Some(records),
        Err(e) => {
            error!("cannot read source for step {}: {}", step, e);
            summary.push(StepReport::failed(step));
            None
        }
    }
}

fn finish_step(ledger: &mut RunLedger, summary: &mut RunSummary, report: StepReport) {
    if report.ok {
        if let Err(e) = ledger.mark_complete(report.name) {
            warn!("could not update run ledger: {}", e);
        }
    }
    summary.push(report);
}
