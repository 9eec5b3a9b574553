//! GeoJSON decoding core for a desktop map viewer.
//!
//! This crate turns GeoJSON documents (RFC 7946) into a strongly typed
//! feature/geometry tree and converts that tree into overlays a map front
//! end can draw.
//!
//! # Overview
//!
//! - **Permissive where GeoJSON is optional**: a wrong-typed `id` or
//!   `properties` member degrades to absent/empty instead of failing
//! - **Strict where it is required**: a missing `type`, an unknown
//!   discriminator or coordinates at the wrong depth fail the whole decode
//! - **No hidden state**: the optional progress hook is an explicit argument
//!
//! # Quick Start
//!
//! ```rust
//! use geojson_viewer::{build_overlays, decode_document, Feature, Geometry};
//!
//! let text = r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[1.0,2.0]},"properties":{},"id":"f1"}"#;
//! let root = decode_document(text).unwrap();
//!
//! let Feature::Feature { geometry, id, .. } = &root else { unreachable!() };
//! assert_eq!(geometry, &Some(Geometry::Point(vec![1.0, 2.0])));
//! assert_eq!(id.as_deref(), Some("f1"));
//!
//! // Points are not drawn.
//! assert!(build_overlays(&root).is_empty());
//! ```
//!
//! # Progress
//!
//! ```rust
//! use geojson_viewer::{decode_document_with, DecodeOptions, Feature, PathSegment, format_path};
//!
//! let text = r#"{"type":"FeatureCollection","features":[{"type":"Feature","geometry":null}]}"#;
//! let mut seen = Vec::new();
//! let mut hook = |path: &[PathSegment], node: &Feature| seen.push((format_path(path), node.type_name()));
//! decode_document_with(text, &DecodeOptions::default(), Some(&mut hook)).unwrap();
//!
//! assert_eq!(seen, vec![
//!     ("$.features[0]".to_string(), "Feature"),
//!     ("$".to_string(), "FeatureCollection"),
//! ]);
//! ```
//!
//! # Modules
//!
//! - [`model`]: Core data types (Geometry, Feature, PropertyValue, paths)
//! - [`codec`]: JSON decoding/encoding, including zstd-compressed documents
//! - [`overlay`]: Conversion of features into drawable overlays
//! - [`validate`]: Opt-in RFC 7946 checks the decoder does not perform
//! - [`error`]: Error types
//! - [`limits`]: Limits for decoding untrusted input

pub mod codec;
pub mod error;
pub mod limits;
pub mod model;
pub mod overlay;
pub mod validate;

// Re-export commonly used types at crate root
pub use codec::{
    decode_document, decode_document_bytes, decode_document_with, decode_feature,
    decode_feature_with, decode_geometry, decode_property_value, encode_document,
    encode_document_compressed, encode_feature, encode_geometry, DecodeOptions, ProgressFn,
};
pub use error::{DecodeError, EncodeError, ErrorCode, ValidationError};
pub use model::{
    format_path, Feature, Geometry, GeometryKind, PathSegment, Position, Properties, PropertyValue,
};
pub use overlay::{build_overlays, overlay_bounds, overlay_for_geometry, LatLng, LatLngBounds, Overlay};
pub use validate::{validate_feature, validate_geometry};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
