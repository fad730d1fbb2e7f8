//! Integration tests for Bamboo Box.
//!
//! End-to-end scenarios over the full service layer: identity, catalog,
//! and orders wired to one shared store, the way the CLI wires them.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p bamboo-box-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use bamboo_box_services::{
    CatalogService, FileStore, IdentityService, Latency, MemoryStore, OrderService, Store,
};

/// All three services over one isolated in-memory store.
pub struct TestContext {
    pub store: Arc<dyn Store>,
    pub identity: IdentityService,
    pub catalog: CatalogService,
    pub orders: OrderService,
}

impl TestContext {
    /// Build a fresh context with zero latency and an empty store.
    #[must_use]
    pub fn new() -> Self {
        let store: Arc<dyn Store> = Arc::new(MemoryStore::new());
        Self {
            identity: IdentityService::new(Arc::clone(&store), Latency::none()),
            catalog: CatalogService::new(Arc::clone(&store), Latency::none()),
            orders: OrderService::new(Arc::clone(&store), Latency::none()),
            store,
        }
    }

    /// Build a context over an on-disk store, the way the CLI does.
    ///
    /// Reopening the same directory yields a context that sees everything
    /// the previous one persisted.
    ///
    /// # Panics
    ///
    /// Panics if the data directory cannot be created.
    #[must_use]
    pub fn on_disk(dir: impl Into<std::path::PathBuf>) -> Self {
        let store: Arc<dyn Store> =
            Arc::new(FileStore::open(dir).expect("creating the data directory"));
        Self {
            identity: IdentityService::new(Arc::clone(&store), Latency::none()),
            catalog: CatalogService::new(Arc::clone(&store), Latency::none()),
            orders: OrderService::new(Arc::clone(&store), Latency::none()),
            store,
        }
    }

    /// Build a fresh context seeded with the demo data.
    ///
    /// # Panics
    ///
    /// Panics if seeding fails, which cannot happen on a memory store.
    #[must_use]
    pub fn seeded() -> Self {
        let ctx = Self::new();
        bamboo_box_services::seed::ensure_seeded(&ctx.store).expect("seeding a memory store");
        ctx
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
