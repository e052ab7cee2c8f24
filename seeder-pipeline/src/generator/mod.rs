//! Deterministic synthetic data for counts mode.
//!
//! Generates category, brand, user and product records from fixed word
//! tables and a fixed-seed RNG, so the same counts always produce the same
//! rows. The records feed the same seeders as CSV mode.
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use seeder_shared::types::{BrandRecord, CategoryRecord, ProductRecord, UserRecord};

const SEED: u64 = 42;

const CATEGORY_NAMES: &[&str] = &[
    "Electronics", "Home & Kitchen", "Sports", "Books", "Toys", "Garden",
    "Beauty", "Automotive", "Office", "Pet Supplies", "Music", "Grocery",
];

const BRAND_WORDS: &[&str] = &[
    "Nova", "Apex", "Orbit", "Vertex", "Lumen", "Cobalt", "Summit", "Drift",
    "Ember", "Haven", "Pulse", "Quartz",
];

const FIRST_NAMES: &[&str] = &[
    "Alice", "Bruno", "Carmen", "Derek", "Elena", "Felix", "Greta", "Hugo",
    "Irene", "Jonas", "Kira", "Liam",
];

const LAST_NAMES: &[&str] = &[
    "Alvarez", "Becker", "Castro", "Dumont", "Eriksen", "Fischer", "Gupta",
    "Hansen", "Ivanov", "Jansen", "Keller", "Lopez",
];

const PRODUCT_ADJECTIVES: &[&str] = &[
    "Compact", "Wireless", "Ergonomic", "Premium", "Rugged", "Portable",
    "Classic", "Smart", "Foldable", "Ultralight",
];

const PRODUCT_NOUNS: &[&str] = &[
    "Speaker", "Kettle", "Backpack", "Lamp", "Monitor", "Blender", "Tent",
    "Keyboard", "Bottle", "Charger",
];

/// Per-kind row counts for a generated run.
#[derive(Debug, Clone, Copy)]
pub struct SeedCounts {
    pub users: usize,
    pub brands: usize,
    pub categories: usize,
    pub products: usize,
}

/// Records synthesized for one run. Only the four root-ish kinds are
/// generated; dependent kinds come from CSV mode.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticData {
    pub users: Vec<UserRecord>,
    pub brands: Vec<BrandRecord>,
    pub categories: Vec<CategoryRecord>,
    pub products: Vec<ProductRecord>,
}

/// Generates deterministic records for the given counts.
pub fn generate(counts: &SeedCounts) -> SyntheticData {
    let mut rng = StdRng::seed_from_u64(SEED);

    let categories = generate_categories(counts.categories, &mut rng);
    let brands = generate_brands(counts.brands);
    let users = generate_users(counts.users, &mut rng);
    let products = generate_products(counts.products, &brands, &categories, &mut rng);

    SyntheticData {
        users,
        brands,
        categories,
        products,
    }
}

fn generate_categories(count: usize, rng: &mut StdRng) -> Vec<CategoryRecord> {
    let mut categories: Vec<CategoryRecord> = Vec::with_capacity(count);
    let mut roots: Vec<String> = Vec::new();

    for i in 0..count {
        let name = numbered(CATEGORY_NAMES, i);
        // Every third category starts a new tree; the rest hang off a root.
        let parent = if i % 3 == 0 || roots.is_empty() {
            None
        } else {
            roots.choose(rng).cloned()
        };
        let id = format!("cat-{}", i + 1);
        if parent.is_none() {
            roots.push(id.clone());
        }
        categories.push(CategoryRecord {
            id,
            description: format!("Everything in {name}"),
            image_url: format!("https://picsum.photos/seed/{}/400", slug(&name)),
            name,
            parent,
        });
    }
    categories
}

fn generate_brands(count: usize) -> Vec<BrandRecord> {
    (0..count)
        .map(|i| {
            let name = numbered(BRAND_WORDS, i);
            BrandRecord {
                id: format!("brand-{}", i + 1),
                description: format!("{name} official storefront"),
                website: format!("https://www.{}.example.com", slug(&name)),
                image_url: format!("https://picsum.photos/seed/{}/400", slug(&name)),
                name,
            }
        })
        .collect()
}

fn generate_users(count: usize, rng: &mut StdRng) -> Vec<UserRecord> {
    (0..count)
        .map(|i| {
            let first = FIRST_NAMES[i % FIRST_NAMES.len()];
            let last = LAST_NAMES[(i / FIRST_NAMES.len() + i) % LAST_NAMES.len()];
            let username = format!("{}.{}{}", first.to_lowercase(), last.to_lowercase(), i + 1);
            let role = if rng.gen_bool(0.3) { "SELLER" } else { "USER" };
            UserRecord {
                id: format!("user-{}", i + 1),
                first_name: first.to_string(),
                last_name: last.to_string(),
                email: format!("{username}@example.com"),
                username,
                role: role.to_string(),
            }
        })
        .collect()
}

fn generate_products(
    count: usize,
    brands: &[BrandRecord],
    categories: &[CategoryRecord],
    rng: &mut StdRng,
) -> Vec<ProductRecord> {
    if brands.is_empty() || categories.is_empty() {
        return Vec::new();
    }
    (0..count)
        .map(|i| {
            let adjective = PRODUCT_ADJECTIVES[i % PRODUCT_ADJECTIVES.len()];
            let noun = PRODUCT_NOUNS[(i / PRODUCT_ADJECTIVES.len() + i) % PRODUCT_NOUNS.len()];
            let name = format!("{adjective} {noun} {}", i + 1);
            let price = (rng.gen_range(5.0..500.0_f64) * 100.0).round() / 100.0;
            ProductRecord {
                id: format!("prod-{}", i + 1),
                description: format!("{name} by the {adjective} line"),
                sku: format!("SKU-{:05}", i + 1),
                is_active: true,
                is_featured: rng.gen_bool(0.2),
                price,
                stock: rng.gen_range(0..250),
                brand_id: brands[i % brands.len()].id.clone(),
                category_id: categories[i % categories.len()].id.clone(),
                name,
            }
        })
        .collect()
}

fn numbered(table: &[&str], i: usize) -> String {
    if i < table.len() {
        table[i].to_string()
    } else {
        format!("{} {}", table[i % table.len()], i / table.len() + 1)
    }
}

fn slug(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect()
}
