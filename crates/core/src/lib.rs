//! Bamboo Box Core - Shared types library.
//!
//! This crate provides common types used across all Bamboo Box components:
//! - `services` - Persistence and service layer (identity, catalog, orders)
//! - `cli` - Command-line front end for the demo
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no store access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, usernames,
//!   roles, order statuses, and the AI order annotation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
