//! Data model types for decoded GeoJSON.
//!
//! This module contains the typed tree the decoder produces:
//! - Geometries and their kinds
//! - Property values (schemaless `properties` payloads)
//! - Features and feature collections
//! - Structural paths into a document

pub mod feature;
pub mod geometry;
pub mod path;
pub mod value;

pub use feature::Feature;
pub use geometry::{Geometry, GeometryKind, Position};
pub use path::{format_path, PathSegment};
pub use value::{Properties, PropertyValue};
