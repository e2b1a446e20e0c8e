// ============================================================================
// Storefront Core - Order Entity
// File: crates/storefront-core/src/domain/order.rs
// Description: Submitted order, immutable after creation
// ============================================================================

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Number;
use storefront_shared::time::serialize_iso;

use super::CartEntry;

/// Order status. Orders never leave `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
}

/// Client-supplied order fields, taken as given.
///
/// `None` means the key was absent, `Some(None)` that it was sent as `null`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewOrder {
    pub customer_name: Option<Option<String>>,
    pub items: Vec<CartEntry>,
    pub total: Option<Option<Number>>,
}

/// Order entity
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<Option<String>>,
    pub items: Vec<CartEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<Option<Number>>,
    pub status: OrderStatus,
    #[serde(serialize_with = "serialize_iso")]
    pub timestamp: DateTime<Utc>,
}

impl Order {
    /// Builds a pending order stamped with the current time.
    pub fn place(id: u64, draft: NewOrder) -> Self {
        Self {
            id,
            customer_name: draft.customer_name,
            items: draft.items,
            total: draft.total,
            status: OrderStatus::Pending,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::{json, Value};

    #[test]
    fn test_place_starts_pending() {
        let order = Order::place(1, NewOrder::default());
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(serde_json::to_value(order.status).unwrap(), json!("pending"));
        assert!(order.items.is_empty());
    }

    #[test]
    fn test_order_wire_shape() {
        let mut order = Order::place(
            7,
            NewOrder {
                customer_name: Some(Some("Alice".to_string())),
                items: vec![CartEntry::from(json!({"id": 1}))],
                total: Some(Number::from_f64(12.99)),
            },
        );
        order.timestamp = Utc.with_ymd_and_hms(2026, 10, 14, 12, 0, 0).unwrap();

        assert_eq!(
            serde_json::to_value(&order).unwrap(),
            json!({
                "id": 7,
                "customerName": "Alice",
                "items": [{"id": 1}],
                "total": 12.99,
                "status": "pending",
                "timestamp": "2026-10-14T12:00:00.000Z"
            })
        );
    }

    #[test]
    fn test_absent_fields_are_omitted() {
        let order = Order::place(1, NewOrder::default());
        let value = serde_json::to_value(&order).unwrap();
        assert!(value.get("customerName").is_none());
        assert!(value.get("total").is_none());
        assert_eq!(value["items"], json!([]));
    }

    #[test]
    fn test_explicit_nulls_are_kept() {
        let order = Order::place(
            1,
            NewOrder {
                customer_name: Some(None),
                total: Some(None),
                ..NewOrder::default()
            },
        );
        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value.get("customerName"), Some(&Value::Null));
        assert_eq!(value.get("total"), Some(&Value::Null));
    }
}
