//! Wire Codec
//!
//! Thin wrappers over prost that attach the message type to decode errors
//! and handle length-delimited framing.

use prost::Message;
use prost::bytes::Buf;

use crate::SchemaError;

/// Encode a message into its binary wire representation.
///
/// Default-valued scalar fields contribute no bytes.
#[must_use]
pub fn encode<M: Message>(message: &M) -> Vec<u8> {
    message.encode_to_vec()
}

/// Encode a message into a fixed buffer, returning the number of bytes written.
///
/// Fails with [`SchemaError::Encode`] when `out` is too small.
pub fn encode_to_slice<M: Message>(message: &M, out: &mut [u8]) -> Result<usize, SchemaError> {
    let len = message.encoded_len();
    let mut cursor = out;
    message.encode(&mut cursor)?;
    Ok(len)
}

/// Decode a message from its binary wire representation.
pub fn decode<M: Message + Default>(bytes: &[u8]) -> Result<M, SchemaError> {
    M::decode(bytes).map_err(|source| SchemaError::Decode {
        message: std::any::type_name::<M>(),
        source,
    })
}

/// Encode a message prefixed with its varint length.
#[must_use]
pub fn encode_delimited<M: Message>(message: &M) -> Vec<u8> {
    message.encode_length_delimited_to_vec()
}

/// Decode a single length-prefixed message.
pub fn decode_delimited<M: Message + Default>(bytes: &[u8]) -> Result<M, SchemaError> {
    M::decode_length_delimited(bytes).map_err(|source| SchemaError::Decode {
        message: std::any::type_name::<M>(),
        source,
    })
}

/// Decode back-to-back length-prefixed messages until the buffer is exhausted.
pub fn decode_delimited_stream<M: Message + Default>(bytes: &[u8]) -> Result<Vec<M>, SchemaError> {
    let mut buf = bytes;
    let mut messages = Vec::new();
    while buf.has_remaining() {
        let message = M::decode_length_delimited(&mut buf).map_err(|source| {
            SchemaError::Decode {
                message: std::any::type_name::<M>(),
                source,
            }
        })?;
        messages.push(message);
    }
    Ok(messages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::{RiskLevel, RiskScorePoint, ValueAtRisk, VarMethod};

    fn sample_point(score: f64) -> RiskScorePoint {
        let mut point = RiskScorePoint {
            timestamp: "2025-01-02T03:04:05Z".to_string(),
            risk_score: score,
            ..Default::default()
        };
        point.set_risk_level(RiskLevel::Elevated);
        point
    }

    #[test]
    fn default_message_encodes_to_nothing() {
        assert!(encode(&ValueAtRisk::default()).is_empty());
    }

    #[test]
    fn explicit_defaults_are_omitted() {
        let var = ValueAtRisk {
            var_95: 0.0,
            var_99: 0.0,
            var_999: 0.0,
            method: VarMethod::Unspecified as i32,
            horizon_days: 0,
            lookback_days: 0,
        };
        assert!(encode(&var).is_empty());
    }

    #[test]
    fn single_double_field_layout() {
        let var = ValueAtRisk {
            var_99: 1.5,
            ..Default::default()
        };
        let bytes = encode(&var);
        // tag 2, wire type 1 (64-bit) followed by little-endian f64
        assert_eq!(bytes[0], 0x11);
        assert_eq!(&bytes[1..], &1.5f64.to_le_bytes());
    }

    #[test]
    fn decode_rejects_truncated_input() {
        let bytes = encode(&sample_point(42.0));
        let err = decode::<RiskScorePoint>(&bytes[..bytes.len() - 3]).unwrap_err();
        assert!(matches!(err, SchemaError::Decode { .. }));
        assert!(err.to_string().contains("RiskScorePoint"));
    }

    #[test]
    fn encode_to_slice_reports_short_buffer() {
        let point = sample_point(12.5);
        let mut small = [0u8; 4];
        assert!(matches!(
            encode_to_slice(&point, &mut small),
            Err(SchemaError::Encode(_))
        ));

        let mut big = [0u8; 128];
        let written = encode_to_slice(&point, &mut big).unwrap();
        assert_eq!(&big[..written], encode(&point).as_slice());
    }

    #[test]
    fn delimited_stream_decodes_every_frame() {
        let mut buf = Vec::new();
        for score in [10.0, 20.0, 30.0] {
            buf.extend(encode_delimited(&sample_point(score)));
        }

        let points: Vec<RiskScorePoint> = decode_delimited_stream(&buf).unwrap();
        let scores: Vec<f64> = points.iter().map(|p| p.risk_score).collect();
        assert_eq!(scores, vec![10.0, 20.0, 30.0]);
        assert!(points.iter().all(|p| p.risk_level() == RiskLevel::Elevated));
    }

    #[test]
    fn delimited_stream_fails_on_partial_frame() {
        let mut buf = encode_delimited(&sample_point(1.0));
        let second = encode_delimited(&sample_point(2.0));
        buf.extend(&second[..second.len() - 1]);
        assert!(decode_delimited_stream::<RiskScorePoint>(&buf).is_err());
    }

    #[test]
    fn decode_delimited_single_frame() {
        let point = sample_point(7.0);
        let decoded: RiskScorePoint = decode_delimited(&encode_delimited(&point)).unwrap();
        assert_eq!(decoded, point);
    }
}
