mod brand;
mod cart;
mod category;
mod entity_kind;
mod image;
mod order;
mod product;
mod report;
mod review;
mod user;
mod variant;
mod wishlist;

pub use brand::BrandRecord;
pub use cart::{CartItemRecord, CartRecord};
pub use category::CategoryRecord;
pub use entity_kind::EntityKind;
pub use image::{ProductImageRecord, VariantImageRecord};
pub use order::{OrderItemRecord, OrderRecord};
pub use product::ProductRecord;
pub use report::{RunSummary, StepReport};
pub use review::ReviewRecord;
pub use user::UserRecord;
pub use variant::VariantRecord;
pub use wishlist::{WishlistItemRecord, WishlistRecord};
