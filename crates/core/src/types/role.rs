//! User roles.

use serde::{Deserialize, Serialize};

/// The two actor roles in the system.
///
/// A role is fixed at registration and gates what the services return:
/// end users see their own orders, merchants see orders against their shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Orders food. Sees only their own orders.
    User,
    /// Owns and edits a shop. Sees and advances orders against that shop.
    Merchant,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Merchant => write!(f, "merchant"),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "merchant" => Ok(Self::Merchant),
            _ => Err(format!("invalid user role: {s}")),
        }
    }
}
