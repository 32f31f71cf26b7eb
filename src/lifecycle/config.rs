//! # Service Configuration
//!
//! Tunables for the simulated backend, loaded with the `config` crate. Sources, later
//! ones overriding earlier ones:
//!
//! 1. Built-in defaults ([`ServiceConfig::default`])
//! 2. `config/storefront.{toml,json,yaml}` (optional)
//! 3. Environment variables prefixed `STOREFRONT_`, nested with `__`
//!
//! ```bash
//! STOREFRONT_LATENCY__PAYMENT_MS=0 STOREFRONT_PAYMENT__SEED=7 cargo run
//! ```

use crate::services::ids::OrderNumbering;
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub latency: LatencyConfig,
    pub payment: PaymentConfig,
    pub orders: OrderNumberConfig,
    pub actors: ActorConfig,
}

/// Simulated round-trip time per operation, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    pub create_order_ms: u64,
    pub get_order_ms: u64,
    pub list_orders_ms: u64,
    pub payment_ms: u64,
    pub cart_read_ms: u64,
    pub cart_write_ms: u64,
    pub catalog_read_ms: u64,
    pub catalog_write_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            create_order_ms: 500,
            get_order_ms: 200,
            list_orders_ms: 300,
            payment_ms: 1000,
            cart_read_ms: 100,
            cart_write_ms: 150,
            catalog_read_ms: 200,
            catalog_write_ms: 150,
        }
    }
}

impl LatencyConfig {
    /// All latencies zero.
    pub fn none() -> Self {
        Self {
            create_order_ms: 0,
            get_order_ms: 0,
            list_orders_ms: 0,
            payment_ms: 0,
            cart_read_ms: 0,
            cart_write_ms: 0,
            catalog_read_ms: 0,
            catalog_write_ms: 0,
        }
    }

    pub fn create_order(&self) -> Duration {
        Duration::from_millis(self.create_order_ms)
    }

    pub fn get_order(&self) -> Duration {
        Duration::from_millis(self.get_order_ms)
    }

    pub fn list_orders(&self) -> Duration {
        Duration::from_millis(self.list_orders_ms)
    }

    pub fn payment(&self) -> Duration {
        Duration::from_millis(self.payment_ms)
    }

    pub fn cart_read(&self) -> Duration {
        Duration::from_millis(self.cart_read_ms)
    }

    pub fn cart_write(&self) -> Duration {
        Duration::from_millis(self.cart_write_ms)
    }

    pub fn catalog_read(&self) -> Duration {
        Duration::from_millis(self.catalog_read_ms)
    }

    pub fn catalog_write(&self) -> Duration {
        Duration::from_millis(self.catalog_write_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PaymentConfig {
    /// Probability in `[0, 1]` that a payment attempt is declined.
    pub failure_rate: f64,
    /// Fixes the decline sequence when set.
    pub seed: Option<u64>,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            failure_rate: 0.10,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OrderNumberConfig {
    pub number_prefix: String,
    pub number_digits: usize,
}

impl Default for OrderNumberConfig {
    fn default() -> Self {
        let numbering = OrderNumbering::default();
        Self {
            number_prefix: numbering.prefix,
            number_digits: numbering.digits,
        }
    }
}

impl OrderNumberConfig {
    pub fn numbering(&self) -> OrderNumbering {
        OrderNumbering {
            prefix: self.number_prefix.clone(),
            digits: self.number_digits,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ActorConfig {
    /// Capacity of each store's request channel.
    pub buffer_size: usize,
}

impl Default for ActorConfig {
    fn default() -> Self {
        Self { buffer_size: 32 }
    }
}

impl ServiceConfig {
    /// Loads defaults, then `config/storefront`, then `STOREFRONT_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_builder(
            config::Config::builder()
                .add_source(config::File::with_name("config/storefront").required(false))
                .add_source(
                    config::Environment::with_prefix("STOREFRONT")
                        .prefix_separator("_")
                        .separator("__")
                        .try_parsing(true),
                ),
        )
    }

    /// Defaults with every latency set to zero. Meant for tests.
    pub fn instant() -> Self {
        Self {
            latency: LatencyConfig::none(),
            ..Self::default()
        }
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.payment.failure_rate) {
            return Err(ConfigError::Message(format!(
                "payment.failure_rate must be within [0, 1], got {}",
                self.payment.failure_rate
            )));
        }
        if self.actors.buffer_size == 0 {
            return Err(ConfigError::Message("actors.buffer_size must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{File, FileFormat};

    fn from_toml(toml: &str) -> Result<ServiceConfig, ConfigError> {
        ServiceConfig::from_builder(
            config::Config::builder().add_source(File::from_str(toml, FileFormat::Toml)),
        )
    }

    #[test]
    fn test_defaults() {
        let config = from_toml("").unwrap();
        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.latency.create_order(), Duration::from_millis(500));
        assert_eq!(config.latency.get_order(), Duration::from_millis(200));
        assert_eq!(config.latency.payment(), Duration::from_millis(1000));
        assert_eq!(config.latency.catalog_read(), Duration::from_millis(200));
        assert_eq!(config.latency.catalog_write(), Duration::from_millis(150));
        assert_eq!(config.payment.failure_rate, 0.10);
        assert_eq!(config.orders.numbering(), OrderNumbering::default());
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let config = from_toml(
            r#"
            [latency]
            payment_ms = 5
            catalog_write_ms = 7

            [payment]
            seed = 42
            "#,
        )
        .unwrap();
        assert_eq!(config.latency.payment_ms, 5);
        assert_eq!(config.latency.catalog_write_ms, 7);
        assert_eq!(config.latency.catalog_read_ms, 200);
        assert_eq!(config.latency.create_order_ms, 500);
        assert_eq!(config.payment.seed, Some(42));
        assert_eq!(config.payment.failure_rate, 0.10);
    }

    #[test]
    fn test_out_of_range_failure_rate_is_rejected() {
        let err = from_toml("[payment]\nfailure_rate = 1.5").unwrap_err();
        assert!(err.to_string().contains("failure_rate"));
    }

    #[test]
    fn test_instant_has_no_latency() {
        assert_eq!(ServiceConfig::instant().latency, LatencyConfig::none());
    }
}
