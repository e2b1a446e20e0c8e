//! Request and response bodies

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};
use storefront_core::{CartEntry, NewOrder, Order};

/// `POST /api/cart`. A missing `item` is stored as `null`.
#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    pub item: Option<Value>,
}

/// `POST /api/orders`. Every field is optional and taken as given.
///
/// An explicit `null` for `customerName` or `total` is echoed back; an absent key is omitted.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[serde(default, deserialize_with = "present")]
    pub customer_name: Option<Option<String>>,
    pub items: Option<Vec<CartEntry>>,
    #[serde(default, deserialize_with = "present")]
    pub total: Option<Option<Number>>,
}

/// Marks a key as present, keeping `null` apart from absence.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl From<CreateOrderRequest> for NewOrder {
    fn from(req: CreateOrderRequest) -> Self {
        NewOrder {
            customer_name: req.customer_name,
            items: req.items.unwrap_or_default(),
            total: req.total,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

#[derive(Debug, Serialize)]
pub struct CartResponse {
    pub success: bool,
    pub cart: Vec<CartEntry>,
}

#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub success: bool,
    pub order: Order,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_order_request_defaults() {
        let req: CreateOrderRequest = serde_json::from_value(json!({})).unwrap();
        let draft = NewOrder::from(req);
        assert_eq!(draft, NewOrder::default());
    }

    #[test]
    fn test_create_order_request_camel_case() {
        let req: CreateOrderRequest = serde_json::from_value(json!({
            "customerName": "Alice",
            "items": [{"id": 1}],
            "total": 12.99
        }))
        .unwrap();
        let draft = NewOrder::from(req);
        assert_eq!(draft.customer_name, Some(Some("Alice".to_string())));
        assert_eq!(draft.items, vec![CartEntry::from(json!({"id": 1}))]);
        assert_eq!(draft.total.flatten().and_then(|t| t.as_f64()), Some(12.99));
    }

    #[test]
    fn test_create_order_request_keeps_null_apart_from_absent() {
        let req: CreateOrderRequest =
            serde_json::from_value(json!({"customerName": null, "total": null})).unwrap();
        assert_eq!(req.customer_name, Some(None));
        assert_eq!(req.total, Some(None));

        let req: CreateOrderRequest = serde_json::from_value(json!({"items": []})).unwrap();
        assert_eq!(req.customer_name, None);
        assert_eq!(req.total, None);
    }

    #[test]
    fn test_create_order_request_rejects_text_total() {
        let result = serde_json::from_value::<CreateOrderRequest>(json!({"total": "12.99"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_add_to_cart_request_without_item() {
        let req: AddToCartRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.item.is_none());
    }
}
