//! # Result Envelope
//!
//! Every service operation returns an [`Envelope`]: either the value or a
//! [`ServiceError`], never both and never neither. On the wire it keeps the shape the
//! storefront already branches on:
//!
//! ```json
//! {"success": true,  "data": {...}}
//! {"success": false, "error": "Order not found"}
//! ```

use crate::services::ServiceError;
use serde::ser::{Serialize, SerializeStruct, Serializer};

#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum Envelope<T> {
    Success(T),
    Failure(ServiceError),
}

impl<T> Envelope<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Envelope::Success(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Envelope::Success(data) => Some(data),
            Envelope::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&ServiceError> {
        match self {
            Envelope::Success(_) => None,
            Envelope::Failure(error) => Some(error),
        }
    }

    pub fn into_result(self) -> Result<T, ServiceError> {
        match self {
            Envelope::Success(data) => Ok(data),
            Envelope::Failure(error) => Err(error),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Envelope<U> {
        match self {
            Envelope::Success(data) => Envelope::Success(f(data)),
            Envelope::Failure(error) => Envelope::Failure(error),
        }
    }
}

impl<T, E: Into<ServiceError>> From<Result<T, E>> for Envelope<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Envelope::Success(data),
            Err(e) => Envelope::Failure(e.into()),
        }
    }
}

impl<T: Serialize> Serialize for Envelope<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Envelope", 2)?;
        match self {
            Envelope::Success(data) => {
                state.serialize_field("success", &true)?;
                state.serialize_field("data", data)?;
            }
            Envelope::Failure(error) => {
                state.serialize_field("success", &false)?;
                state.serialize_field("error", &error.to_string())?;
            }
        }
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_shape() {
        let envelope: Envelope<u32> = Envelope::Success(5);
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({"success": true, "data": 5})
        );
        assert_eq!(envelope.data(), Some(&5));
        assert!(envelope.error().is_none());
    }

    #[test]
    fn test_failure_shape() {
        let envelope: Envelope<u32> = Envelope::Failure(ServiceError::NotFound("Order"));
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({"success": false, "error": "Order not found"})
        );
        assert!(!envelope.is_success());
        assert!(envelope.data().is_none());
    }

    #[test]
    fn test_from_result_and_map() {
        let ok: Result<u32, ServiceError> = Ok(2);
        assert_eq!(Envelope::from(ok).map(|n| n * 10), Envelope::Success(20));

        let err: Result<u32, ServiceError> = Err(ServiceError::PaymentDeclined);
        assert_eq!(
            Envelope::from(err).into_result(),
            Err(ServiceError::PaymentDeclined)
        );
    }
}
