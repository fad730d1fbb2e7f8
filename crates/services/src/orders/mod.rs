//! Order service.
//!
//! Creates orders in the pending state, scopes listings by actor role, and
//! advances order status through the transition table. Status changes that
//! are not in the table fail with [`OrderError::IllegalTransition`] and
//! leave the record untouched.

mod error;

pub use error::OrderError;

use std::sync::Arc;

use chrono::Utc;

use bamboo_box_core::{OrderAnalysis, OrderId, OrderStatus, ShopId, UserId, UserRole, Username};

use crate::latency::Latency;
use crate::models::{Order, Shop};
use crate::store::{Store, StoreExt, buckets};

/// Everything the caller supplies to create an order.
///
/// `username` and `shop_name` are denormalized copies the caller takes from
/// the session and the chosen shop.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: UserId,
    pub username: Username,
    pub shop_id: ShopId,
    pub shop_name: String,
    pub content: String,
    pub ai_analysis: Option<OrderAnalysis>,
}

/// Order service.
pub struct OrderService {
    store: Arc<dyn Store>,
    latency: Latency,
}

impl OrderService {
    /// Create an order service over `store`.
    #[must_use]
    pub fn new(store: Arc<dyn Store>, latency: Latency) -> Self {
        Self { store, latency }
    }

    /// Create a pending order and prepend it to the order list, so the
    /// list stays most-recent-first.
    ///
    /// # Errors
    ///
    /// Returns `Store` if the orders bucket cannot be read or written.
    pub async fn create(&self, new: NewOrder) -> Result<Order, OrderError> {
        Latency::pause(self.latency.mutate).await;

        let order = Order {
            id: OrderId::generate(),
            user_id: new.user_id,
            username: new.username,
            shop_id: new.shop_id,
            shop_name: new.shop_name,
            content: new.content,
            ai_analysis: new.ai_analysis,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        };

        let mut orders: Vec<Order> = self.store.get_or(buckets::ORDERS, Vec::new())?;
        orders.insert(0, order.clone());
        self.store.put(buckets::ORDERS, &orders)?;

        tracing::info!(order_id = %order.id, shop_id = %order.shop_id, "created order");
        Ok(order)
    }

    /// Orders visible to `actor_id` in the given role.
    ///
    /// Merchants see orders against their owned shop (empty if they own
    /// none); end users see their own orders. Either way the result keeps
    /// the stored most-recent-first order.
    ///
    /// # Errors
    ///
    /// Returns `Store` if a bucket cannot be read.
    pub async fn list_for(
        &self,
        role: UserRole,
        actor_id: &UserId,
    ) -> Result<Vec<Order>, OrderError> {
        Latency::pause(self.latency.orders).await;

        let orders: Vec<Order> = self.store.get_or(buckets::ORDERS, Vec::new())?;

        match role {
            UserRole::Merchant => {
                let shops: Vec<Shop> = self.store.get_or(buckets::SHOPS, Vec::new())?;
                let Some(my_shop) = shops.into_iter().find(|s| &s.owner_id == actor_id) else {
                    return Ok(Vec::new());
                };
                Ok(orders
                    .into_iter()
                    .filter(|o| o.shop_id == my_shop.id)
                    .collect())
            }
            UserRole::User => Ok(orders
                .into_iter()
                .filter(|o| &o.user_id == actor_id)
                .collect()),
        }
    }

    /// Advance an order's status.
    ///
    /// Only transitions in the table (`pending -> confirmed | cancelled`,
    /// `confirmed -> completed`) are accepted. There is deliberately no
    /// ownership check: any caller holding an existing order id may advance
    /// it, even against a shop they do not own (pending product decision).
    ///
    /// # Errors
    ///
    /// Returns `OrderNotFound` if the id is absent and `IllegalTransition`
    /// if the requested change is not in the table.
    pub async fn set_status(
        &self,
        order_id: &OrderId,
        new_status: OrderStatus,
    ) -> Result<Order, OrderError> {
        Latency::pause(self.latency.orders).await;

        let mut orders: Vec<Order> = self.store.get_or(buckets::ORDERS, Vec::new())?;
        let order = orders
            .iter_mut()
            .find(|o| &o.id == order_id)
            .ok_or(OrderError::OrderNotFound)?;

        if !order.status.can_transition_to(new_status) {
            return Err(bamboo_box_core::TransitionError {
                from: order.status,
                to: new_status,
            }
            .into());
        }

        order.status = new_status;
        let updated = order.clone();
        self.store.put(buckets::ORDERS, &orders)?;

        tracing::info!(order_id = %updated.id, status = %updated.status, "order status changed");
        Ok(updated)
    }
}
