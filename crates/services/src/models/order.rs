//! Order record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bamboo_box_core::{OrderAnalysis, OrderId, OrderStatus, ShopId, UserId, Username};

/// A user's free-text food request against one shop.
///
/// `username` and `shop_name` are denormalized copies taken at creation
/// time as a read optimization; they are never synchronized and can drift
/// from the source-of-truth `User`/`Shop` records if those are edited.
///
/// Orders are created pending, advanced only through the status transition
/// table, and never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub username: Username,
    pub shop_id: ShopId,
    pub shop_name: String,
    /// What the user typed, verbatim.
    pub content: String,
    /// Optional AI annotation captured at creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_analysis: Option<OrderAnalysis>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}
