//! Core types for Bamboo Box.
//!
//! All types here are plain data: serde-serializable, no I/O, no store
//! access. Entity records built from these live in the services crate.

mod annotation;
mod email;
mod id;
mod role;
mod status;
mod username;

pub use annotation::OrderAnalysis;
pub use email::{Email, EmailError};
pub use id::{DishId, OrderId, SessionToken, ShopId, UserId};
pub use role::UserRole;
pub use status::{OrderStatus, TransitionError};
pub use username::{Username, UsernameError};
