use std::fmt;

/// Identifies a category of domain object tracked by the seeding run.
///
/// The registry partitions its source-key → target-id mappings by this kind,
/// so two entity kinds can reuse the same source key without colliding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    User,
    Brand,
    Category,
    Product,
    Variant,
    Review,
    Wishlist,
    Cart,
    Order,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::User => "users",
            EntityKind::Brand => "brands",
            EntityKind::Category => "categories",
            EntityKind::Product => "products",
            EntityKind::Variant => "variants",
            EntityKind::Review => "reviews",
            EntityKind::Wishlist => "wishlists",
            EntityKind::Cart => "carts",
            EntityKind::Order => "orders",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
