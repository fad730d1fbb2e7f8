//! Persisted entity records.
//!
//! These structs are what actually lands in the store buckets. Wire field
//! names are camelCase to match the persisted layout (`ownerId`, `shopId`,
//! ...), which has no schema versioning, so renames here are breaking.

mod order;
mod shop;
mod user;

pub use order::Order;
pub use shop::{Dish, Shop};
pub use user::{Session, User};
