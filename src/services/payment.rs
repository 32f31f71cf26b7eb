//! # Payment Simulator
//!
//! Stand-in for a remote payment gateway. After the configured latency each attempt
//! draws one sample from a [`PaymentDecider`]; samples below the failure rate are
//! declined, everything else is approved with a fresh transaction id. There is no retry
//! and the payment payload is not inspected.

use crate::lifecycle::config::PaymentConfig;
use crate::model::{PaymentOutcome, PaymentRequest, PaymentStatus};
use crate::services::ids::IdGenerator;
use crate::services::latency::simulate_latency;
use crate::services::{Envelope, ServiceError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tracing::{info, instrument, warn};

/// Source of the uniform samples that decide each payment attempt.
pub trait PaymentDecider: Send + Sync {
    /// A sample in `[0, 1)`.
    fn sample(&self) -> f64;
}

/// Decider backed by a standard RNG, optionally seeded for reproducible runs.
pub struct SeededDecider {
    rng: Mutex<StdRng>,
}

impl SeededDecider {
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn from_config(config: &PaymentConfig) -> Self {
        match config.seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl PaymentDecider for SeededDecider {
    fn sample(&self) -> f64 {
        self.rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .gen::<f64>()
    }
}

/// Always returns the same sample. `FixedSample(0.0)` declines whenever the failure rate
/// is positive; `FixedSample(0.99)` approves at the default rate.
#[derive(Debug, Clone, Copy)]
pub struct FixedSample(pub f64);

impl PaymentDecider for FixedSample {
    fn sample(&self) -> f64 {
        self.0
    }
}

#[derive(Clone)]
pub struct PaymentService {
    decider: Arc<dyn PaymentDecider>,
    ids: Arc<IdGenerator>,
    failure_rate: f64,
    latency: Duration,
}

impl PaymentService {
    pub fn new(
        decider: Arc<dyn PaymentDecider>,
        ids: Arc<IdGenerator>,
        failure_rate: f64,
        latency: Duration,
    ) -> Self {
        Self {
            decider,
            ids,
            failure_rate,
            latency,
        }
    }

    #[instrument(skip(self, request), fields(amount = request.amount))]
    pub async fn process_payment(&self, request: PaymentRequest) -> Envelope<PaymentOutcome> {
        simulate_latency(self.latency).await;

        let sample = self.decider.sample();
        if sample < self.failure_rate {
            warn!(sample, failure_rate = self.failure_rate, "Payment declined");
            return Envelope::Failure(ServiceError::PaymentDeclined);
        }

        let outcome = PaymentOutcome {
            transaction_id: self.ids.next_transaction_id(),
            status: PaymentStatus::Completed,
        };
        info!(transaction_id = %outcome.transaction_id, "Payment approved");
        Envelope::Success(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(decider: impl PaymentDecider + 'static, failure_rate: f64) -> PaymentService {
        PaymentService::new(
            Arc::new(decider),
            Arc::new(IdGenerator::new()),
            failure_rate,
            Duration::ZERO,
        )
    }

    #[tokio::test]
    async fn test_low_sample_is_declined() {
        let payments = service(FixedSample(0.05), 0.10);
        let envelope = payments.process_payment(PaymentRequest::new(10.0, "card")).await;
        assert_eq!(envelope, Envelope::Failure(ServiceError::PaymentDeclined));
    }

    #[tokio::test]
    async fn test_sample_at_rate_is_approved() {
        let payments = service(FixedSample(0.10), 0.10);
        let outcome = payments
            .process_payment(PaymentRequest::new(10.0, "card"))
            .await
            .into_result()
            .unwrap();
        assert_eq!(outcome.status, PaymentStatus::Completed);
        assert!(outcome.transaction_id.starts_with("txn_"));
    }

    #[tokio::test]
    async fn test_zero_rate_never_declines() {
        let payments = service(FixedSample(0.0), 0.0);
        for _ in 0..100 {
            assert!(payments.process_payment(PaymentRequest::default()).await.is_success());
        }
    }

    #[test]
    fn test_seeded_decider_is_reproducible() {
        let a = SeededDecider::seeded(7);
        let b = SeededDecider::seeded(7);
        for _ in 0..50 {
            let sample = a.sample();
            assert!((0.0..1.0).contains(&sample));
            assert_eq!(sample, b.sample());
        }
    }
}
