//! Schema helper errors.

/// Errors raised by the codec, object and time helpers.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Bytes are not a valid encoding of the target message.
    #[error("failed to decode {message}: {source}")]
    Decode {
        /// Fully qualified message type name.
        message: &'static str,
        /// Underlying prost error.
        #[source]
        source: prost::DecodeError,
    },

    /// Encoding into a caller-supplied buffer ran out of capacity.
    #[error("failed to encode message: {0}")]
    Encode(#[from] prost::EncodeError),

    /// Object conversion failed.
    #[error("object conversion failed: {0}")]
    Json(#[from] serde_json::Error),

    /// A timestamp field is not valid RFC 3339.
    #[error("invalid timestamp '{value}': {reason}")]
    InvalidTimestamp {
        /// The offending field value.
        value: String,
        /// Parser error.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_timestamp_display() {
        let err = SchemaError::InvalidTimestamp {
            value: "yesterday".to_string(),
            reason: "input contains invalid characters".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid timestamp 'yesterday': input contains invalid characters"
        );
    }
}
