//! GeoJSON decoding/encoding.
//!
//! Decoding is a single recursive descent over a parsed `serde_json::Value`.
//! A failure anywhere aborts the whole decode.

pub mod document;
pub mod feature;
pub mod geometry;
pub mod primitives;
pub mod value;

pub use document::{
    decode_document, decode_document_bytes, decode_document_with, decompress,
    encode_document, encode_document_compressed, is_compressed, DecodeOptions,
};
pub use feature::{decode_feature, decode_feature_with, encode_feature, ProgressFn};
pub use geometry::{decode_geometry, decode_geometry_with, encode_geometry};
pub use primitives::ObjectReader;
pub use value::{decode_properties, decode_property_value, encode_properties, encode_property_value};
