//! Placed-order types for the order-status lookup.

use crate::ids::OrderId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a placed order, as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    /// A status this client doesn't know about yet; produced by [`Self::parse`].
    Unknown,
}

impl OrderStatus {
    /// Parse a backend status string; unrecognized values map to `Unknown`.
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "pending" => OrderStatus::Pending,
            "processing" => OrderStatus::Processing,
            "shipped" => OrderStatus::Shipped,
            "delivered" => OrderStatus::Delivered,
            "cancelled" | "canceled" => OrderStatus::Cancelled,
            _ => OrderStatus::Unknown,
        }
    }

    /// Display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One row in the shopper's order history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderSummary {
    /// Order identifier.
    pub id: OrderId,
    /// Creation timestamp, as formatted by the backend.
    pub created_at: String,
    /// Grand total charged.
    pub total: Money,
    /// Current lifecycle state.
    pub status: OrderStatus,
    /// Comma-joined product names for the row's summary column.
    pub product_names: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse() {
        assert_eq!(OrderStatus::parse("pending"), OrderStatus::Pending);
        assert_eq!(OrderStatus::parse("SHIPPED"), OrderStatus::Shipped);
        assert_eq!(OrderStatus::parse("canceled"), OrderStatus::Cancelled);
        assert_eq!(OrderStatus::parse("teleported"), OrderStatus::Unknown);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(OrderStatus::Delivered.to_string(), "Delivered");
    }
}
