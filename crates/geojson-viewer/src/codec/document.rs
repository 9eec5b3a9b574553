//! Whole-document decoding/encoding.
//!
//! Accepts UTF-8 text or raw bytes. Raw bytes that start with the zstd frame
//! magic are decompressed first.

use std::io::Read;

use log::debug;
use serde_json::Value;

use crate::codec::feature::{decode_feature_with, encode_feature, ProgressFn};
use crate::error::{DecodeError, EncodeError};
use crate::limits::{MAX_DOCUMENT_SIZE, MAX_NESTING_DEPTH, ZSTD_MAGIC};
use crate::model::Feature;

/// Options for decoding documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Maximum nesting of FeatureCollections, and separately of
    /// GeometryCollections within one geometry.
    pub max_depth: usize,
    /// Maximum document size in bytes, measured after decompression.
    pub max_document_size: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: MAX_NESTING_DEPTH,
            max_document_size: MAX_DOCUMENT_SIZE,
        }
    }
}

impl DecodeOptions {
    /// Creates default decoding options.
    pub fn new() -> Self {
        Self::default()
    }
}

// =============================================================================
// DECODING
// =============================================================================

/// Decodes a GeoJSON document whose root is a Feature or FeatureCollection.
pub fn decode_document(text: &str) -> Result<Feature, DecodeError> {
    decode_document_with(text, &DecodeOptions::default(), None)
}

/// Decodes a GeoJSON document with options and an optional progress hook.
pub fn decode_document_with(
    text: &str,
    options: &DecodeOptions,
    progress: Option<&mut ProgressFn<'_>>,
) -> Result<Feature, DecodeError> {
    if text.len() > options.max_document_size {
        return Err(DecodeError::DocumentTooLarge {
            len: text.len(),
            max: options.max_document_size,
        });
    }

    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    debug!("decoding document ({} bytes)", text.len());

    let value: Value = serde_json::from_str(text)?;
    let root = decode_feature_with(&value, options, progress)?;

    debug!("decoded {} with {} nodes", root.type_name(), root.node_count());
    Ok(root)
}

/// Decodes a document from raw bytes, decompressing zstd input.
pub fn decode_document_bytes(
    input: &[u8],
    options: &DecodeOptions,
    progress: Option<&mut ProgressFn<'_>>,
) -> Result<Feature, DecodeError> {
    if is_compressed(input) {
        let decompressed = decompress(input, options.max_document_size)?;
        debug!(
            "decompressed {} bytes to {} bytes",
            input.len(),
            decompressed.len()
        );
        decode_utf8(&decompressed, options, progress)
    } else {
        decode_utf8(input, options, progress)
    }
}

fn decode_utf8(
    input: &[u8],
    options: &DecodeOptions,
    progress: Option<&mut ProgressFn<'_>>,
) -> Result<Feature, DecodeError> {
    let text = std::str::from_utf8(input).map_err(|e| DecodeError::InvalidUtf8 {
        valid_up_to: e.valid_up_to(),
    })?;
    decode_document_with(text, options, progress)
}

/// Returns true if `input` starts with the zstd frame magic.
pub fn is_compressed(input: &[u8]) -> bool {
    input.starts_with(&ZSTD_MAGIC)
}

/// Decompresses a zstd document, refusing output larger than `max_size`.
pub fn decompress(input: &[u8], max_size: usize) -> Result<Vec<u8>, DecodeError> {
    let decoder =
        zstd::Decoder::new(input).map_err(|e| DecodeError::DecompressionFailed(e.to_string()))?;

    let mut decompressed = Vec::new();
    decoder
        .take((max_size as u64).saturating_add(1))
        .read_to_end(&mut decompressed)
        .map_err(|e| DecodeError::DecompressionFailed(e.to_string()))?;

    if decompressed.len() > max_size {
        return Err(DecodeError::DocumentTooLarge {
            len: decompressed.len(),
            max: max_size,
        });
    }

    Ok(decompressed)
}

// =============================================================================
// ENCODING
// =============================================================================

/// Encodes a feature tree as compact GeoJSON text.
pub fn encode_document(feature: &Feature) -> Result<String, EncodeError> {
    let value = encode_feature(feature)?;
    serde_json::to_string(&value).map_err(|e| EncodeError::Serialization(e.to_string()))
}

/// Encodes a feature tree as zstd-compressed GeoJSON.
pub fn encode_document_compressed(feature: &Feature, level: i32) -> Result<Vec<u8>, EncodeError> {
    let text = encode_document(feature)?;
    zstd::encode_all(text.as_bytes(), level).map_err(|e| EncodeError::CompressionFailed(e.to_string()))
}
