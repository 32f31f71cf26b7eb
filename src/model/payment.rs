use crate::model::OrderId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Payment details submitted at checkout. Passed through to the simulated gateway
/// without validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<OrderId>,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub method: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PaymentRequest {
    pub fn new(amount: f64, method: impl Into<String>) -> Self {
        Self {
            amount,
            method: method.into(),
            ..Self::default()
        }
    }

    pub fn for_order(mut self, order_id: OrderId) -> Self {
        self.order_id = Some(order_id);
        self
    }
}

/// Gateway status of a payment attempt.
///
/// The simulated gateway only ever hands back `Completed`: a declined attempt reaches
/// the caller as `ServiceError::PaymentDeclined` in a failure envelope, not as an outcome.
/// `Failed` keeps the `"completed" | "failed"` wire vocabulary readable, so outcomes
/// stored by the storefront still deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Completed,
    Failed,
}

/// Result of a successful gateway call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOutcome {
    pub transaction_id: String,
    pub status: PaymentStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_outcome_wire_shape() {
        let outcome = PaymentOutcome {
            transaction_id: "txn_1760781234567".into(),
            status: PaymentStatus::Completed,
        };
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({"transactionId": "txn_1760781234567", "status": "completed"})
        );

        let failed: PaymentOutcome =
            serde_json::from_value(json!({"transactionId": "txn_1", "status": "failed"})).unwrap();
        assert_eq!(failed.status, PaymentStatus::Failed);
    }
}
