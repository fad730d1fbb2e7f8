//! Bamboo Box service layer.
//!
//! The invariant-bearing part of the application: entity lifecycles, status
//! transitions, and role-scoped queries over a client-side key-value store.
//! There is no network server and no real storage engine; the [`store`]
//! module's four JSON buckets stand in for a backend.
//!
//! # Modules
//!
//! - [`store`] - the key-value `Store` abstraction and its backends
//! - [`models`] - persisted `User`/`Shop`/`Order` records
//! - [`identity`] - registration, login, session handling
//! - [`catalog`] - shop listing and merchant shop upsert
//! - [`orders`] - order creation, role-scoped listing, status transitions
//! - [`annotator`] - the external AI annotation collaborator
//! - [`config`] - environment configuration
//! - [`seed`] - demo seed data
//!
//! # Concurrency model
//!
//! Single client, cooperative: every call reads a whole bucket, mutates it
//! in memory, and writes it back. Two processes sharing a data directory
//! are last-writer-wins with no conflict detection.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod annotator;
pub mod catalog;
pub mod config;
pub mod identity;
pub mod latency;
pub mod models;
pub mod orders;
pub mod seed;
pub mod store;

pub use catalog::{CatalogError, CatalogService};
pub use config::{AppConfig, ConfigError, GeminiConfig};
pub use identity::{IdentityError, IdentityService};
pub use latency::Latency;
pub use orders::{NewOrder, OrderError, OrderService};
pub use store::{FileStore, MemoryStore, Store, StoreError};
