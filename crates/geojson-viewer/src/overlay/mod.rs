//! Conversion of decoded features into map overlays.
//!
//! The map front end draws overlays; this module decides which geometries
//! become which overlay. Only LineString and Polygon are drawn. Points,
//! the Multi* kinds and GeometryCollections produce nothing.
//!
//! GeoJSON positions are `[longitude, latitude]`. Overlays use `LatLng`, so
//! every position has its axes swapped here.

use log::warn;

use crate::model::{Feature, Geometry, Position};

/// A geographic coordinate in map-API axis order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Converts a GeoJSON position. Returns `None` if it has fewer than two
    /// numbers; any altitude is dropped.
    pub fn from_position(position: &[f64]) -> Option<LatLng> {
        match position {
            [lng, lat, ..] => Some(LatLng::new(*lat, *lng)),
            _ => None,
        }
    }
}

/// A drawable shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    Polyline(Vec<LatLng>),
    /// A filled polygon; `interiors` are holes, in ring order.
    Polygon {
        exterior: Vec<LatLng>,
        interiors: Vec<Vec<LatLng>>,
    },
}

impl Overlay {
    /// Bounding box of the overlay's outline.
    ///
    /// Holes lie inside the exterior and do not contribute.
    pub fn bounds(&self) -> Option<LatLngBounds> {
        let outline = match self {
            Overlay::Polyline(points) => points,
            Overlay::Polygon { exterior, .. } => exterior,
        };
        LatLngBounds::from_points(outline)
    }
}

/// An axis-aligned lat/lng rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLngBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl LatLngBounds {
    /// Smallest bounds containing all `points`, or `None` for no points.
    pub fn from_points(points: &[LatLng]) -> Option<LatLngBounds> {
        let (first, rest) = points.split_first()?;
        let mut bounds = LatLngBounds {
            south: first.lat,
            west: first.lng,
            north: first.lat,
            east: first.lng,
        };
        for point in rest {
            bounds.extend(*point);
        }
        Some(bounds)
    }

    pub fn extend(&mut self, point: LatLng) {
        self.south = self.south.min(point.lat);
        self.north = self.north.max(point.lat);
        self.west = self.west.min(point.lng);
        self.east = self.east.max(point.lng);
    }

    pub fn union(self, other: LatLngBounds) -> LatLngBounds {
        LatLngBounds {
            south: self.south.min(other.south),
            west: self.west.min(other.west),
            north: self.north.max(other.north),
            east: self.east.max(other.east),
        }
    }
}

/// Union of the bounds of all overlays, or `None` if there is nothing to show.
pub fn overlay_bounds(overlays: &[Overlay]) -> Option<LatLngBounds> {
    overlays
        .iter()
        .filter_map(Overlay::bounds)
        .reduce(LatLngBounds::union)
}

/// Builds the overlays for a feature tree, in document order.
pub fn build_overlays(feature: &Feature) -> Vec<Overlay> {
    let mut overlays = Vec::new();
    collect_overlays(feature, &mut overlays);
    overlays
}

fn collect_overlays(feature: &Feature, out: &mut Vec<Overlay>) {
    match feature {
        Feature::Feature { geometry, .. } => {
            out.extend(geometry.as_ref().and_then(overlay_for_geometry));
        }
        Feature::FeatureCollection { features, .. } => {
            for child in features {
                collect_overlays(child, out);
            }
        }
    }
}

/// Converts a single geometry, if its kind is drawable.
pub fn overlay_for_geometry(geometry: &Geometry) -> Option<Overlay> {
    let overlay = match geometry {
        Geometry::LineString(positions) => Overlay::Polyline(convert_line(positions)?),
        Geometry::Polygon(rings) => {
            let Some((exterior, holes)) = rings.split_first() else {
                warn!("polygon without rings has no overlay");
                return None;
            };
            Overlay::Polygon {
                exterior: convert_line(exterior)?,
                interiors: holes
                    .iter()
                    .map(|ring| convert_line(ring))
                    .collect::<Option<_>>()?,
            }
        }
        // TODO: draw Points as markers once the front end has a marker layer.
        Geometry::Point(_) => return None,
        Geometry::MultiPoint(_)
        | Geometry::MultiLineString(_)
        | Geometry::MultiPolygon(_)
        | Geometry::GeometryCollection(_) => return None,
    };
    Some(overlay)
}

fn convert_line(positions: &[Position]) -> Option<Vec<LatLng>> {
    let converted = positions
        .iter()
        .map(|position| LatLng::from_position(position))
        .collect::<Option<Vec<_>>>();
    if converted.is_none() {
        warn!("skipping geometry with a position shorter than two numbers");
    }
    converted
}
