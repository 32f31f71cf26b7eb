use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for Orders.
///
/// Serializes as a bare integer. Values are at least the number of milliseconds since the
/// Unix epoch at the time the order was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u64);

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raised when a lookup key is not a plain decimal order identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not an order id: {0:?}")]
pub struct ParseOrderIdError(pub String);

impl FromStr for OrderId {
    type Err = ParseOrderIdError;

    /// Exact conversion: only ASCII digits are accepted. Signs, whitespace, trailing
    /// characters and values outside `u64` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseOrderIdError(s.to_string()));
        }
        s.parse::<u64>()
            .map(OrderId)
            .map_err(|_| ParseOrderIdError(s.to_string()))
    }
}

/// Lifecycle state of an order. Orders are created `Confirmed` and never leave it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Confirmed,
}

/// One line of an order as submitted by the storefront.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub sku: String,
    pub qty: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl OrderItem {
    pub fn new(sku: impl Into<String>, qty: u32) -> Self {
        Self {
            sku: sku.into(),
            qty,
            price: None,
        }
    }
}

/// Delivery details captured at checkout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShippingInfo {
    pub full_name: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

/// Caller-supplied order fields, stored verbatim.
///
/// Nothing here is validated by the service layer. Fields the storefront sends that have
/// no dedicated slot land in `extra` and are serialized back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping: Option<ShippingInfo>,
    #[serde(default)]
    pub total: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl OrderRequest {
    pub fn new(items: Vec<OrderItem>, total: f64) -> Self {
        Self {
            items,
            total,
            ..Self::default()
        }
    }

    pub fn with_shipping(mut self, shipping: ShippingInfo) -> Self {
        self.shipping = Some(shipping);
        self
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// A confirmed customer order.
///
/// Serialized with camelCase keys and the request fields flattened alongside the
/// generated ones:
///
/// ```json
/// {"id":1760000000123,"orderNumber":"VT000123","status":"confirmed",
///  "orderDate":"2026-10-18T09:00:00Z","items":[{"sku":"A1","qty":1}],"total":49.99}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub order_number: String,
    pub status: OrderStatus,
    pub order_date: DateTime<Utc>,
    #[serde(flatten)]
    pub details: OrderRequest,
}

impl Order {
    /// Creates a confirmed order stamped with the current time.
    ///
    /// `order_number` starts empty; the order store fills it in when the order is
    /// appended.
    pub fn new(id: OrderId, details: OrderRequest) -> Self {
        Self {
            id,
            order_number: String::new(),
            status: OrderStatus::Confirmed,
            order_date: Utc::now(),
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_order_id_parsing_is_exact() {
        assert_eq!("1760000000123".parse::<OrderId>(), Ok(OrderId(1760000000123)));
        for raw in ["", "12a", "a12", " 12", "12 ", "-12", "+12", "1.5", "99999999999999999999"] {
            assert!(raw.parse::<OrderId>().is_err(), "{raw:?} should not parse");
        }
    }

    #[test]
    fn test_order_serializes_in_storefront_shape() {
        let details = OrderRequest::new(vec![OrderItem::new("A1", 1)], 49.99)
            .with_field("customerNote", "gift wrap");
        let mut order = Order::new(OrderId(42), details);
        order.order_number = "VT000042".into();

        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["id"], json!(42));
        assert_eq!(value["orderNumber"], json!("VT000042"));
        assert_eq!(value["status"], json!("confirmed"));
        assert_eq!(value["items"], json!([{"sku": "A1", "qty": 1}]));
        assert_eq!(value["total"], json!(49.99));
        assert_eq!(value["customerNote"], json!("gift wrap"));
        assert!(value.get("shipping").is_none());
    }

    #[test]
    fn test_order_request_keeps_unknown_fields() {
        let request: OrderRequest = serde_json::from_value(json!({
            "items": [{"sku": "B7", "qty": 2, "price": 12.5}],
            "total": 25.0,
            "couponCode": "AUTUMN",
        }))
        .unwrap();
        assert_eq!(request.items[0].price, Some(12.5));
        assert_eq!(request.extra["couponCode"], json!("AUTUMN"));
    }
}
