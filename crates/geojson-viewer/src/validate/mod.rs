//! RFC 7946 validation for decoded trees.
//!
//! The decoder only checks shape. This module checks the structural rules
//! RFC 7946 adds on top, for callers that want them:
//! - positions have at least two finite numbers
//! - line strings have at least two positions
//! - linear rings have at least four positions and are closed
//!
//! Winding order and coordinate ranges are not checked.

use crate::error::ValidationError;
use crate::model::{format_path, Feature, Geometry, PathSegment, Position};

/// Validates every geometry in a feature tree.
///
/// Returns the first violation in document order.
pub fn validate_feature(feature: &Feature) -> Result<(), ValidationError> {
    let mut path = Vec::new();
    walk_feature(feature, &mut path)
}

/// Validates a single geometry.
pub fn validate_geometry(geometry: &Geometry) -> Result<(), ValidationError> {
    let mut path = Vec::new();
    walk_geometry(geometry, &mut path)
}

fn walk_feature(feature: &Feature, path: &mut Vec<PathSegment>) -> Result<(), ValidationError> {
    match feature {
        Feature::Feature { geometry: Some(geometry), .. } => {
            path.push(PathSegment::Key("geometry"));
            walk_geometry(geometry, path)?;
            path.pop();
        }
        Feature::Feature { geometry: None, .. } => {}
        Feature::FeatureCollection { features, .. } => {
            path.push(PathSegment::Key("features"));
            for (index, child) in features.iter().enumerate() {
                path.push(PathSegment::Index(index));
                walk_feature(child, path)?;
                path.pop();
            }
            path.pop();
        }
    }
    Ok(())
}

fn walk_geometry(geometry: &Geometry, path: &mut Vec<PathSegment>) -> Result<(), ValidationError> {
    match geometry {
        Geometry::Point(position) => {
            path.push(PathSegment::Key("coordinates"));
            check_position(position, path)?;
            path.pop();
        }
        Geometry::MultiPoint(positions) => {
            with_coordinates(path, |path| check_positions(positions, path))?;
        }
        Geometry::LineString(positions) => {
            with_coordinates(path, |path| check_line(positions, path))?;
        }
        Geometry::MultiLineString(lines) => with_coordinates(path, |path| {
            each(lines, path, |line, path| check_line(line, path))
        })?,
        Geometry::Polygon(rings) => {
            with_coordinates(path, |path| check_rings(rings, path))?;
        }
        Geometry::MultiPolygon(polygons) => with_coordinates(path, |path| {
            each(polygons, path, |rings, path| check_rings(rings, path))
        })?,
        Geometry::GeometryCollection(geometries) => {
            path.push(PathSegment::Key("geometries"));
            each(geometries, path, walk_geometry)?;
            path.pop();
        }
    }
    Ok(())
}

fn with_coordinates(
    path: &mut Vec<PathSegment>,
    check: impl FnOnce(&mut Vec<PathSegment>) -> Result<(), ValidationError>,
) -> Result<(), ValidationError> {
    path.push(PathSegment::Key("coordinates"));
    check(path)?;
    path.pop();
    Ok(())
}

fn each<T>(
    items: &[T],
    path: &mut Vec<PathSegment>,
    mut check: impl FnMut(&T, &mut Vec<PathSegment>) -> Result<(), ValidationError>,
) -> Result<(), ValidationError> {
    for (index, item) in items.iter().enumerate() {
        path.push(PathSegment::Index(index));
        check(item, path)?;
        path.pop();
    }
    Ok(())
}

fn check_position(position: &Position, path: &[PathSegment]) -> Result<(), ValidationError> {
    if position.len() < 2 {
        return Err(ValidationError::PositionTooShort {
            path: format_path(path),
            len: position.len(),
        });
    }
    if position.iter().any(|n| !n.is_finite()) {
        return Err(ValidationError::NonFiniteCoordinate {
            path: format_path(path),
        });
    }
    Ok(())
}

fn check_positions(positions: &[Position], path: &mut Vec<PathSegment>) -> Result<(), ValidationError> {
    each(positions, path, |position, path| check_position(position, path))
}

fn check_line(positions: &[Position], path: &mut Vec<PathSegment>) -> Result<(), ValidationError> {
    if positions.len() < 2 {
        return Err(ValidationError::LineStringTooShort {
            path: format_path(path),
            len: positions.len(),
        });
    }
    check_positions(positions, path)
}

fn check_rings(rings: &[Vec<Position>], path: &mut Vec<PathSegment>) -> Result<(), ValidationError> {
    each(rings, path, |ring, path| {
        if ring.len() < 4 {
            return Err(ValidationError::RingTooShort {
                path: format_path(path),
                len: ring.len(),
            });
        }
        check_positions(ring, path)?;
        if ring.first() != ring.last() {
            return Err(ValidationError::RingNotClosed {
                path: format_path(path),
            });
        }
        Ok(())
    })
}
