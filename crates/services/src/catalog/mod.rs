//! Catalog service.
//!
//! Reads and writes the shop list. Shops embed their dishes, so the whole
//! menu travels with the shop record on every upsert.

mod error;

pub use error::CatalogError;

use std::sync::Arc;

use bamboo_box_core::UserId;

use crate::latency::Latency;
use crate::models::Shop;
use crate::store::{Store, StoreExt, buckets};

/// Catalog service.
pub struct CatalogService {
    store: Arc<dyn Store>,
    latency: Latency,
}

impl CatalogService {
    /// Create a catalog service over `store`.
    #[must_use]
    pub fn new(store: Arc<dyn Store>, latency: Latency) -> Self {
        Self { store, latency }
    }

    /// All shops, in stored (display) order.
    ///
    /// # Errors
    ///
    /// Returns `Store` if the shops bucket cannot be read.
    pub async fn list_shops(&self) -> Result<Vec<Shop>, CatalogError> {
        Latency::pause(self.latency.browse).await;
        Ok(self.store.get_or(buckets::SHOPS, Vec::new())?)
    }

    /// The first shop owned by `owner_id`, or `None`.
    ///
    /// # Errors
    ///
    /// Returns `Store` if the shops bucket cannot be read.
    pub async fn my_shop(&self, owner_id: &UserId) -> Result<Option<Shop>, CatalogError> {
        Latency::pause(self.latency.browse).await;
        let shops: Vec<Shop> = self.store.get_or(buckets::SHOPS, Vec::new())?;
        Ok(shops.into_iter().find(|s| &s.owner_id == owner_id))
    }

    /// Upsert a shop by id: replace in place if it exists, append otherwise.
    ///
    /// No validation of numeric fields; the caller supplies defaults for
    /// anything unset.
    ///
    /// # Errors
    ///
    /// Returns `Store` if the shops bucket cannot be read or written.
    pub async fn save_shop(&self, shop: Shop) -> Result<Shop, CatalogError> {
        Latency::pause(self.latency.mutate).await;

        let mut shops: Vec<Shop> = self.store.get_or(buckets::SHOPS, Vec::new())?;
        match shops.iter_mut().find(|s| s.id == shop.id) {
            Some(existing) => *existing = shop.clone(),
            None => shops.push(shop.clone()),
        }
        self.store.put(buckets::SHOPS, &shops)?;

        tracing::info!(shop_id = %shop.id, owner_id = %shop.owner_id, "saved shop");
        Ok(shop)
    }
}
