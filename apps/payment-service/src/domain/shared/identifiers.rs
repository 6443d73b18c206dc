//! Strongly-typed identifiers.
//!
//! Generated identifiers carry a short type prefix (`pay_`, `rfd_`, `sub_`)
//! so they are recognisable in logs and client payloads.

use std::fmt;

macro_rules! define_id {
    ($name:ident, $prefix:literal, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing identifier.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Generate a fresh identifier.
            #[must_use]
            pub fn generate() -> Self {
                Self(format!(
                    concat!($prefix, "_{}"),
                    uuid::Uuid::new_v4().simple()
                ))
            }

            /// Get the inner string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

define_id!(PaymentId, "pay", "Identifier of a payment.");
define_id!(RefundId, "rfd", "Identifier of a refund against a payment.");
define_id!(SubscriptionId, "sub", "Identifier of a subscription.");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_carry_prefix() {
        let id = PaymentId::generate();
        assert!(id.as_str().starts_with("pay_"));
        assert_eq!(id.as_str().len(), "pay_".len() + 32);
        assert!(SubscriptionId::generate().as_str().starts_with("sub_"));
    }

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(RefundId::generate(), RefundId::generate());
    }

    #[test]
    fn wraps_existing_value() {
        let id = PaymentId::from("pay_42");
        assert_eq!(id.to_string(), "pay_42");
        assert_eq!(id.into_inner(), "pay_42");
    }
}
