//! Object Conversion
//!
//! Plain-object views of messages for logging, fixtures and JSON transports,
//! following the proto3 JSON mapping implemented by the generated pbjson
//! impls. Default-valued fields are left out and enums are written by name.
//! On input both camelCase and original field names are accepted, enums may
//! be names or numbers, and absent keys take the proto3 default.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::SchemaError;

/// Convert a message into a JSON object.
pub fn to_object<M: Serialize>(message: &M) -> Result<Value, SchemaError> {
    Ok(serde_json::to_value(message)?)
}

/// Build a message from a JSON object.
pub fn from_object<M: DeserializeOwned>(object: Value) -> Result<M, SchemaError> {
    Ok(serde_json::from_value(object)?)
}

/// Serialize a message as a compact JSON string.
pub fn to_json_string<M: Serialize>(message: &M) -> Result<String, SchemaError> {
    Ok(serde_json::to_string(message)?)
}

/// Parse a message from a JSON string.
pub fn from_json_str<M: DeserializeOwned>(json: &str) -> Result<M, SchemaError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::payment::{PaymentMethod, PaymentMethodType, UpiDetails};
    use crate::risk::{ConcentrationMetrics, RiskCategory, RiskFactor, ValueAtRisk, VarMethod};

    #[test]
    fn keys_are_camel_case() {
        let var = ValueAtRisk {
            var_95: 1.0,
            horizon_days: 10,
            ..Default::default()
        };
        let object = to_object(&var).unwrap();
        assert_eq!(object, json!({ "var95": 1.0, "horizonDays": 10 }));
    }

    #[test]
    fn default_fields_are_omitted() {
        let object = to_object(&PaymentMethod::default()).unwrap();
        assert_eq!(object, json!({}));

        let method = PaymentMethod {
            method_type: PaymentMethodType::Upi as i32,
            upi: Some(UpiDetails::default()),
            ..Default::default()
        };
        assert_eq!(
            to_object(&method).unwrap(),
            json!({ "methodType": "PAYMENT_METHOD_TYPE_UPI", "upi": {} })
        );
    }

    #[test]
    fn enums_are_written_by_name() {
        let var = ValueAtRisk {
            method: VarMethod::MonteCarlo as i32,
            ..Default::default()
        };
        assert_eq!(to_object(&var).unwrap()["method"], "VAR_METHOD_MONTE_CARLO");
    }

    #[test]
    fn unknown_enum_number_cannot_be_named() {
        let var = ValueAtRisk {
            method: 42,
            ..Default::default()
        };
        assert!(matches!(to_object(&var), Err(SchemaError::Json(_))));
    }

    #[test]
    fn original_field_names_are_accepted() {
        let var: ValueAtRisk = from_object(json!({
            "var_95": 1.5,
            "horizon_days": 10,
            "method": "VAR_METHOD_HISTORICAL"
        }))
        .unwrap();
        assert_eq!(var.var_95, 1.5);
        assert_eq!(var.horizon_days, 10);
        assert_eq!(var.method(), VarMethod::Historical);
    }

    #[test]
    fn enum_names_and_numbers_are_accepted() {
        let by_name: RiskFactor =
            from_object(json!({ "category": "RISK_CATEGORY_CREDIT" })).unwrap();
        let by_number: RiskFactor = from_object(json!({ "category": 2 })).unwrap();
        assert_eq!(by_name.category(), RiskCategory::Credit);
        assert_eq!(by_name, by_number);

        let err = from_object::<RiskFactor>(json!({ "category": "RISK_CATEGORY_WEATHER" }));
        assert!(err.is_err());
    }

    #[test]
    fn missing_keys_take_defaults() {
        let method: PaymentMethod = from_object(json!({
            "methodType": "PAYMENT_METHOD_TYPE_UPI",
            "upi": { "vpa": "alice@okbank" }
        }))
        .unwrap();

        assert_eq!(method.method_type(), PaymentMethodType::Upi);
        assert_eq!(
            method.upi,
            Some(UpiDetails {
                vpa: "alice@okbank".to_string()
            })
        );
        assert!(method.card.is_none());
        assert!(method.token.is_empty());
    }

    #[test]
    fn map_fields_become_objects() {
        let mut metrics = ConcentrationMetrics::default();
        metrics.sector_weights.insert("tech".to_string(), 0.4);
        metrics.sector_weights.insert("energy".to_string(), 0.1);

        let json = to_json_string(&metrics).unwrap();
        assert_eq!(json, r#"{"sectorWeights":{"energy":0.1,"tech":0.4}}"#);

        let back: ConcentrationMetrics = from_json_str(&json).unwrap();
        assert_eq!(back, metrics);
    }

    #[test]
    fn numbers_may_be_quoted() {
        let var: ValueAtRisk = from_json_str(r#"{"var99": "2.5", "lookbackDays": "250"}"#).unwrap();
        assert_eq!(var.var_99, 2.5);
        assert_eq!(var.lookback_days, 250);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = from_json_str::<ValueAtRisk>("{\"var95\": \"high\"}").unwrap_err();
        assert!(matches!(err, SchemaError::Json(_)));
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let err = from_json_str::<ValueAtRisk>(r#"{"var95": 1.0, "var_95": 2.0}"#).unwrap_err();
        assert!(matches!(err, SchemaError::Json(_)));
    }
}
