//! CLI command implementations.

pub mod auth;
pub mod orders;
pub mod seed;
pub mod shops;
