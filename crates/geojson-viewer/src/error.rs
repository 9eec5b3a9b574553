//! Error types for GeoJSON decoding, encoding and validation.

use thiserror::Error;

/// Coarse classification of decode failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// `type` names something that is not a geometry kind.
    InvalidGeometryType,
    /// `type` names something that is neither a Feature nor a FeatureCollection.
    InvalidFeatureType,
    /// Structural failure: malformed JSON, missing field, wrong shape.
    Decode,
}

impl ErrorCode {
    /// Returns a stable short name for the code.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorCode::InvalidGeometryType => "invalid-geometry-type",
            ErrorCode::InvalidFeatureType => "invalid-feature-type",
            ErrorCode::Decode => "decode",
        }
    }
}

/// Error during GeoJSON decoding.
///
/// Structural variants carry the path of the node that failed, rendered as
/// `$.features[2].geometry` style text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("invalid geometry type {found:?}")]
    InvalidGeometryType { found: String },

    #[error("invalid feature type {found:?}")]
    InvalidFeatureType { found: String },

    // === Structural ===
    #[error("malformed JSON: {0}")]
    Json(String),

    #[error("missing required field {field:?} at {path}")]
    MissingField { field: &'static str, path: String },

    #[error("expected {expected} for {field:?} at {path}")]
    WrongKind {
        field: &'static str,
        expected: &'static str,
        path: String,
    },

    #[error("malformed number in {field:?} at {path}")]
    MalformedNumber { field: &'static str, path: String },

    #[error("nesting depth exceeds maximum {max} at {path}")]
    NestingTooDeep { max: usize, path: String },

    #[error("document size {len} exceeds maximum {max}")]
    DocumentTooLarge { len: usize, max: usize },

    #[error("document is not valid UTF-8 (at byte {valid_up_to})")]
    InvalidUtf8 { valid_up_to: usize },

    #[error("zstd decompression failed: {0}")]
    DecompressionFailed(String),
}

impl DecodeError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            DecodeError::InvalidGeometryType { .. } => ErrorCode::InvalidGeometryType,
            DecodeError::InvalidFeatureType { .. } => ErrorCode::InvalidFeatureType,
            _ => ErrorCode::Decode,
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        DecodeError::Json(err.to_string())
    }
}

/// Error during encoding back to GeoJSON.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    #[error("non-finite number in {context} cannot be represented in JSON")]
    NonFiniteNumber { context: &'static str },

    #[error("JSON serialization failed: {0}")]
    Serialization(String),

    #[error("zstd compression failed: {0}")]
    CompressionFailed(String),
}

/// RFC 7946 violation found by the opt-in validator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("position at {path} has {len} numbers (at least 2 required)")]
    PositionTooShort { path: String, len: usize },

    #[error("non-finite coordinate at {path}")]
    NonFiniteCoordinate { path: String },

    #[error("line string at {path} has {len} positions (at least 2 required)")]
    LineStringTooShort { path: String, len: usize },

    #[error("linear ring at {path} has {len} positions (at least 4 required)")]
    RingTooShort { path: String, len: usize },

    #[error("linear ring at {path} is not closed")]
    RingNotClosed { path: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DecodeError::InvalidGeometryType { found: "Triangle".to_string() };
        assert_eq!(err.code(), ErrorCode::InvalidGeometryType);

        let err = DecodeError::InvalidFeatureType { found: "Widget".to_string() };
        assert_eq!(err.code(), ErrorCode::InvalidFeatureType);

        let err = DecodeError::MissingField { field: "type", path: "$".to_string() };
        assert_eq!(err.code(), ErrorCode::Decode);
        assert_eq!(err.code().name(), "decode");
    }

    #[test]
    fn test_error_messages() {
        let err = DecodeError::WrongKind {
            field: "coordinates",
            expected: "array",
            path: "$.features[0].geometry".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "expected array for \"coordinates\" at $.features[0].geometry"
        );

        let err = DecodeError::InvalidGeometryType { found: "Triangle".to_string() };
        assert_eq!(err.to_string(), "invalid geometry type \"Triangle\"");
    }

    #[test]
    fn test_json_error_conversion() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: DecodeError = parse.into();
        assert!(matches!(err, DecodeError::Json(_)));
        assert_eq!(err.code(), ErrorCode::Decode);
    }
}
