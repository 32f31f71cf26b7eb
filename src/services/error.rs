//! Errors carried by a failure [`Envelope`](crate::services::Envelope).
//!
//! `Display` is the human-readable message the storefront shows; the variant is the
//! machine-readable kind.

use crate::cart_actor::CartError;
use crate::catalog_actor::CatalogError;
use crate::order_actor::OrderError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// A lookup matched nothing. A normal negative result.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// The simulated gateway declined the payment. The caller may retry.
    #[error("Payment failed. Please try again.")]
    PaymentDeclined,

    /// A backing store did not answer.
    #[error("{collaborator} unavailable: {reason}")]
    Unavailable {
        collaborator: &'static str,
        reason: String,
    },

    /// A backing store refused the request.
    #[error("{0}")]
    Rejected(String),
}

impl ServiceError {
    /// Stable, machine-readable kind of the failure.
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::NotFound(_) => "not_found",
            ServiceError::PaymentDeclined => "payment_declined",
            ServiceError::Unavailable { .. } => "unavailable",
            ServiceError::Rejected(_) => "rejected",
        }
    }
}

impl From<OrderError> for ServiceError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::NotFound(_) => ServiceError::NotFound("Order"),
            OrderError::Rejected(reason) => ServiceError::Rejected(reason),
            OrderError::ActorCommunicationError(reason) => ServiceError::Unavailable {
                collaborator: "Order store",
                reason,
            },
        }
    }
}

impl From<CartError> for ServiceError {
    fn from(e: CartError) -> Self {
        match e {
            CartError::NotFound(_) => ServiceError::NotFound("Cart item"),
            CartError::InvalidQuantity(_) => ServiceError::Rejected(e.to_string()),
            CartError::ActorCommunicationError(reason) => ServiceError::Unavailable {
                collaborator: "Cart",
                reason,
            },
        }
    }
}

impl From<CatalogError> for ServiceError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::NotFound(_) => ServiceError::NotFound("Product"),
            CatalogError::Rejected(reason) => ServiceError::Rejected(reason),
            CatalogError::ActorCommunicationError(reason) => ServiceError::Unavailable {
                collaborator: "Catalog",
                reason,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_storefront_copy() {
        assert_eq!(ServiceError::NotFound("Order").to_string(), "Order not found");
        assert_eq!(
            ServiceError::PaymentDeclined.to_string(),
            "Payment failed. Please try again."
        );
    }

    #[test]
    fn test_store_errors_map_to_kinds() {
        let unavailable = ServiceError::from(CartError::ActorCommunicationError("Actor closed".into()));
        assert_eq!(unavailable.code(), "unavailable");
        assert_eq!(unavailable.to_string(), "Cart unavailable: Actor closed");

        let rejected = ServiceError::from(CartError::InvalidQuantity(0));
        assert_eq!(rejected, ServiceError::Rejected("Invalid quantity: 0".into()));

        assert_eq!(
            ServiceError::from(OrderError::NotFound("12".into())),
            ServiceError::NotFound("Order")
        );
    }
}
