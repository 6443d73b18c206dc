//! Service Configuration Settings
//!
//! Every setting has a default; a variable that is set but malformed is an
//! error rather than silently ignored.

use crate::application::use_cases::PageSettings;
use crate::domain::shared::Currency;
use crate::infrastructure::gateway::DEFAULT_DECLINE_CARDS;

/// Server port settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    /// gRPC server port.
    pub grpc_port: u16,
    /// Health check and metrics HTTP port.
    pub health_port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            grpc_port: 50061,
            health_port: 8091,
        }
    }
}

/// Payment behaviour settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentSettings {
    /// Currency used when a request leaves it empty.
    pub default_currency: Currency,
    /// List page size limits.
    pub pages: PageSettings,
    /// Card numbers the mock gateway declines.
    pub decline_cards: Vec<String>,
}

impl Default for PaymentSettings {
    fn default() -> Self {
        Self {
            default_currency: Currency::inr(),
            pages: PageSettings::default(),
            decline_cards: DEFAULT_DECLINE_CARDS.iter().map(|c| (*c).to_string()).collect(),
        }
    }
}

/// Complete service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Server port settings.
    pub server: ServerSettings,
    /// Payment behaviour settings.
    pub payments: PaymentSettings,
}

impl ServiceConfig {
    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unusable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let env = Env { lookup: &lookup };

        let server = ServerSettings {
            grpc_port: env.parse("PAYMENT_SERVICE_GRPC_PORT", defaults.server.grpc_port)?,
            health_port: env.parse("PAYMENT_SERVICE_HEALTH_PORT", defaults.server.health_port)?,
        };

        let default_currency = match env.get("PAYMENT_SERVICE_DEFAULT_CURRENCY") {
            Some(code) => Currency::parse(&code).map_err(|e| ConfigError::InvalidValue {
                key: "PAYMENT_SERVICE_DEFAULT_CURRENCY".to_string(),
                reason: e.to_string(),
            })?,
            None => defaults.payments.default_currency,
        };

        let max_size: usize =
            env.parse("PAYMENT_SERVICE_MAX_PAGE_SIZE", defaults.payments.pages.max_size)?;
        let default_size: usize = env.parse(
            "PAYMENT_SERVICE_DEFAULT_PAGE_SIZE",
            defaults.payments.pages.default_size,
        )?;
        if max_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "PAYMENT_SERVICE_MAX_PAGE_SIZE".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if default_size == 0 || default_size > max_size {
            return Err(ConfigError::InvalidValue {
                key: "PAYMENT_SERVICE_DEFAULT_PAGE_SIZE".to_string(),
                reason: format!("must be between 1 and {max_size}"),
            });
        }

        let decline_cards = env.get("PAYMENT_SERVICE_DECLINE_CARDS").map_or(
            defaults.payments.decline_cards,
            |list| {
                list.split(',')
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(str::to_string)
                    .collect()
            },
        );

        Ok(Self {
            server,
            payments: PaymentSettings {
                default_currency,
                pages: PageSettings {
                    default_size,
                    max_size,
                },
                decline_cards,
            },
        })
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Environment variable has a value that cannot be used.
    #[error("invalid value for {key}: {reason}")]
    InvalidValue {
        /// Variable name.
        key: String,
        /// What is wrong with it.
        reason: String,
    },
}

struct Env<'a, F: Fn(&str) -> Option<String>> {
    lookup: &'a F,
}

impl<F: Fn(&str) -> Option<String>> Env<'_, F> {
    /// Set and non-blank value.
    fn get(&self, key: &str) -> Option<String> {
        (self.lookup)(key).filter(|v| !v.trim().is_empty())
    }

    fn parse<T>(&self, key: &str, default: T) -> Result<T, ConfigError>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        match self.get(key) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e: T::Err| ConfigError::InvalidValue {
                    key: key.to_string(),
                    reason: e.to_string(),
                }),
            None => Ok(default),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<ServiceConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ServiceConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config(&[]).unwrap();
        assert_eq!(config.server.grpc_port, 50061);
        assert_eq!(config.server.health_port, 8091);
        assert_eq!(config.payments.default_currency.as_str(), "INR");
        assert_eq!(config.payments.pages.max_size, 100);
        assert_eq!(config.payments.pages.default_size, 20);
        assert_eq!(config.payments.decline_cards, vec!["4000000000000002"]);
    }

    #[test]
    fn reads_overrides() {
        let config = config(&[
            ("PAYMENT_SERVICE_GRPC_PORT", "6000"),
            ("PAYMENT_SERVICE_DEFAULT_CURRENCY", "usd"),
            ("PAYMENT_SERVICE_MAX_PAGE_SIZE", "50"),
            ("PAYMENT_SERVICE_DEFAULT_PAGE_SIZE", "10"),
            ("PAYMENT_SERVICE_DECLINE_CARDS", "4000000000000002, 4000000000009995,"),
        ])
        .unwrap();
        assert_eq!(config.server.grpc_port, 6000);
        assert_eq!(config.payments.default_currency.as_str(), "USD");
        assert_eq!(config.payments.pages.max_size, 50);
        assert_eq!(config.payments.pages.default_size, 10);
        assert_eq!(config.payments.decline_cards.len(), 2);
    }

    #[test]
    fn rejects_malformed_values() {
        let err = config(&[("PAYMENT_SERVICE_GRPC_PORT", "http")]).unwrap_err();
        assert!(err.to_string().contains("PAYMENT_SERVICE_GRPC_PORT"));

        assert!(config(&[("PAYMENT_SERVICE_DEFAULT_CURRENCY", "RUPEE")]).is_err());
        assert!(config(&[("PAYMENT_SERVICE_MAX_PAGE_SIZE", "0")]).is_err());
        assert!(
            config(&[
                ("PAYMENT_SERVICE_MAX_PAGE_SIZE", "10"),
                ("PAYMENT_SERVICE_DEFAULT_PAGE_SIZE", "20"),
            ])
            .is_err()
        );
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = config(&[("PAYMENT_SERVICE_HEALTH_PORT", "  ")]).unwrap();
        assert_eq!(config.server.health_port, 8091);
    }
}
