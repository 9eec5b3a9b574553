//! Geometry decoding/encoding.
//!
//! Dispatches on the `type` member through [`GeometryKind::from_name`] and
//! reads `coordinates` at the depth that kind prescribes, or recurses into
//! `geometries` for a GeometryCollection.

use log::trace;
use serde_json::{Map, Value};

use crate::codec::document::DecodeOptions;
use crate::codec::primitives::ObjectReader;
use crate::codec::value::encode_number;
use crate::error::{DecodeError, EncodeError};
use crate::model::{format_path, Geometry, GeometryKind, PathSegment, Position};

// =============================================================================
// DECODING
// =============================================================================

/// Decodes a geometry object with default options.
pub fn decode_geometry(value: &Value) -> Result<Geometry, DecodeError> {
    decode_geometry_with(value, &DecodeOptions::default())
}

/// Decodes a geometry object.
pub fn decode_geometry_with(value: &Value, options: &DecodeOptions) -> Result<Geometry, DecodeError> {
    let mut path = Vec::new();
    decode_geometry_at(value, "geometry", &mut path, 0, options)
}

/// Decodes the geometry at `path`.
///
/// `depth` counts enclosing GeometryCollections.
pub(crate) fn decode_geometry_at(
    value: &Value,
    field: &'static str,
    path: &mut Vec<PathSegment>,
    depth: usize,
    options: &DecodeOptions,
) -> Result<Geometry, DecodeError> {
    if depth > options.max_depth {
        return Err(DecodeError::NestingTooDeep {
            max: options.max_depth,
            path: format_path(path),
        });
    }

    let reader = ObjectReader::new(value, field, path)?;
    let type_name = reader.read_str("type")?;
    let kind = GeometryKind::from_name(type_name).ok_or_else(|| DecodeError::InvalidGeometryType {
        found: type_name.to_string(),
    })?;

    let geometry = match kind {
        GeometryKind::Point => Geometry::Point(reader.read_position("coordinates")?),
        GeometryKind::MultiPoint => Geometry::MultiPoint(reader.read_positions("coordinates")?),
        GeometryKind::LineString => Geometry::LineString(reader.read_positions("coordinates")?),
        GeometryKind::MultiLineString => {
            Geometry::MultiLineString(reader.read_position_lists("coordinates")?)
        }
        GeometryKind::Polygon => Geometry::Polygon(reader.read_position_lists("coordinates")?),
        GeometryKind::MultiPolygon => Geometry::MultiPolygon(reader.read_polygons("coordinates")?),
        GeometryKind::GeometryCollection => {
            let members = reader.read_array("geometries")?;
            let mut geometries = Vec::with_capacity(members.len());
            path.push(PathSegment::Key("geometries"));
            for (index, member) in members.iter().enumerate() {
                path.push(PathSegment::Index(index));
                let child = decode_geometry_at(member, "geometries", path, depth + 1, options);
                path.pop();
                geometries.push(child?);
            }
            path.pop();
            Geometry::GeometryCollection(geometries)
        }
    };

    trace!("decoded {} at {}", kind.name(), format_path(path));
    Ok(geometry)
}

// =============================================================================
// ENCODING
// =============================================================================

/// Encodes a geometry as a GeoJSON geometry object.
pub fn encode_geometry(geometry: &Geometry) -> Result<Value, EncodeError> {
    let mut object = Map::new();
    object.insert(
        "type".to_string(),
        Value::String(geometry.kind().name().to_string()),
    );

    let (key, body) = match geometry {
        Geometry::Point(position) => ("coordinates", encode_position(position)?),
        Geometry::MultiPoint(positions) | Geometry::LineString(positions) => {
            ("coordinates", encode_positions(positions)?)
        }
        Geometry::MultiLineString(lists) | Geometry::Polygon(lists) => {
            ("coordinates", encode_position_lists(lists)?)
        }
        Geometry::MultiPolygon(polygons) => (
            "coordinates",
            Value::Array(
                polygons
                    .iter()
                    .map(|rings| encode_position_lists(rings))
                    .collect::<Result<_, _>>()?,
            ),
        ),
        Geometry::GeometryCollection(geometries) => (
            "geometries",
            Value::Array(
                geometries
                    .iter()
                    .map(encode_geometry)
                    .collect::<Result<_, _>>()?,
            ),
        ),
    };
    object.insert(key.to_string(), body);

    Ok(Value::Object(object))
}

fn encode_position(position: &Position) -> Result<Value, EncodeError> {
    Ok(Value::Array(
        position
            .iter()
            .map(|n| encode_number(*n, "coordinates").map(Value::Number))
            .collect::<Result<_, _>>()?,
    ))
}

fn encode_positions(positions: &[Position]) -> Result<Value, EncodeError> {
    Ok(Value::Array(
        positions
            .iter()
            .map(encode_position)
            .collect::<Result<_, _>>()?,
    ))
}

fn encode_position_lists(lists: &[Vec<Position>]) -> Result<Value, EncodeError> {
    Ok(Value::Array(
        lists
            .iter()
            .map(|list| encode_positions(list))
            .collect::<Result<_, _>>()?,
    ))
}
