//! End-to-end decoding of GeoJSON documents.

use geojson_viewer::codec::decode_document_bytes;
use geojson_viewer::{
    build_overlays, decode_document, encode_document, encode_document_compressed, overlay_bounds,
    validate_feature, DecodeError, DecodeOptions, ErrorCode, Feature, Geometry, GeometryKind,
    LatLng, Overlay, Properties, PropertyValue,
};

const SAMPLE: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "id": "harbour",
      "geometry": {"type": "Point", "coordinates": [102.0, 0.5]},
      "properties": {"name": "Harbour", "depth": 12.5, "open": true}
    },
    {
      "type": "Feature",
      "id": "ferry",
      "geometry": {
        "type": "LineString",
        "coordinates": [[102.0, 0.0], [103.0, 1.0], [104.0, 0.0], [105.0, 1.0]]
      },
      "properties": {"operators": ["north", "south"], "schedule": {"weekday": 6, "weekend": null}}
    },
    {
      "type": "Feature",
      "id": "island",
      "geometry": {
        "type": "Polygon",
        "coordinates": [
          [[100.0, 0.0], [101.0, 0.0], [101.0, 1.0], [100.0, 1.0], [100.0, 0.0]],
          [[100.2, 0.2], [100.8, 0.2], [100.8, 0.8], [100.2, 0.8], [100.2, 0.2]]
        ]
      },
      "properties": null
    },
    {
      "type": "Feature",
      "geometry": {
        "type": "GeometryCollection",
        "geometries": [
          {"type": "MultiPoint", "coordinates": [[100.0, 0.0], [101.0, 1.0]]},
          {"type": "MultiLineString", "coordinates": [[[100.0, 0.0], [101.0, 1.0]], [[102.0, 2.0], [103.0, 3.0]]]},
          {"type": "MultiPolygon", "coordinates": [[[[102.0, 2.0], [103.0, 2.0], [103.0, 3.0], [102.0, 2.0]]]]}
        ]
      }
    }
  ]
}"#;

#[test]
fn test_sample_document() {
    let root = decode_document(SAMPLE).unwrap();
    let Feature::FeatureCollection { features, properties, id } = &root else {
        panic!("expected collection");
    };
    assert_eq!(features.len(), 4);
    assert!(properties.is_empty());
    assert_eq!(id, &None);

    let harbour = &features[0];
    assert_eq!(harbour.id(), Some("harbour"));
    assert_eq!(harbour.properties()["name"], PropertyValue::from("Harbour"));
    assert_eq!(harbour.properties()["depth"], PropertyValue::Number(12.5));
    assert_eq!(harbour.properties()["open"], PropertyValue::Bool(true));

    let ferry = features[1].properties();
    assert_eq!(
        ferry["operators"],
        PropertyValue::Array(vec!["north".into(), "south".into()])
    );
    let PropertyValue::Object(schedule) = &ferry["schedule"] else {
        panic!("expected object");
    };
    assert_eq!(schedule["weekday"], PropertyValue::Number(6.0));
    assert!(schedule["weekend"].is_null());

    assert!(features[2].properties().is_empty());
    assert_eq!(features[3].id(), None);

    let kinds: Vec<GeometryKind> = root.geometries().iter().map(|g| g.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            GeometryKind::Point,
            GeometryKind::LineString,
            GeometryKind::Polygon,
            GeometryKind::GeometryCollection,
        ]
    );
}

#[test]
fn test_sample_overlays() {
    let root = decode_document(SAMPLE).unwrap();
    let overlays = build_overlays(&root);

    assert_eq!(overlays.len(), 2);
    let Overlay::Polyline(line) = &overlays[0] else {
        panic!("expected polyline");
    };
    assert_eq!(line[0], LatLng::new(0.0, 102.0));
    let Overlay::Polygon { interiors, .. } = &overlays[1] else {
        panic!("expected polygon");
    };
    assert_eq!(interiors.len(), 1);

    let bounds = overlay_bounds(&overlays).unwrap();
    assert_eq!((bounds.south, bounds.north), (0.0, 1.0));
    assert_eq!((bounds.west, bounds.east), (100.0, 105.0));
}

#[test]
fn test_sample_is_valid_rfc7946() {
    let root = decode_document(SAMPLE).unwrap();
    assert_eq!(validate_feature(&root), Ok(()));
}

#[test]
fn test_point_feature_end_to_end() {
    let root = decode_document(
        r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[1.0,2.0]},"properties":{},"id":"f1"}"#,
    )
    .unwrap();
    assert_eq!(
        root,
        Feature::Feature {
            geometry: Some(Geometry::Point(vec![1.0, 2.0])),
            properties: Properties::default(),
            id: Some("f1".to_string()),
        }
    );
}

#[test]
fn test_two_points_no_overlays() {
    let root = decode_document(
        r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","geometry":{"type":"Point","coordinates":[1,2]},"properties":{}},
            {"type":"Feature","geometry":{"type":"Point","coordinates":[3,4]},"properties":{}}
        ]}"#,
    )
    .unwrap();
    assert_eq!(root.node_count(), 3);
    assert_eq!(build_overlays(&root).len(), 0);
}

#[test]
fn test_error_kinds() {
    let err = decode_document(r#"{"type":"Feature","geometry":{"type":"Triangle","coordinates":[]}}"#)
        .unwrap_err();
    assert_eq!(err, DecodeError::InvalidGeometryType { found: "Triangle".to_string() });
    assert_eq!(err.code(), ErrorCode::InvalidGeometryType);

    let err = decode_document(r#"{"type":"Widget"}"#).unwrap_err();
    assert_eq!(err, DecodeError::InvalidFeatureType { found: "Widget".to_string() });
    assert_eq!(err.code(), ErrorCode::InvalidFeatureType);

    let err = decode_document(r#"{"geometry":null}"#).unwrap_err();
    assert_eq!(err.code(), ErrorCode::Decode);
}

#[test]
fn test_geometry_root_is_not_a_feature() {
    let err = decode_document(r#"{"type":"Point","coordinates":[0,0]}"#).unwrap_err();
    assert_eq!(err, DecodeError::InvalidFeatureType { found: "Point".to_string() });
}

#[test]
fn test_text_and_compressed_agree() {
    let root = decode_document(SAMPLE).unwrap();
    let text = encode_document(&root).unwrap();
    let compressed = encode_document_compressed(&root, 3).unwrap();

    let options = DecodeOptions::default();
    let from_text = decode_document_bytes(text.as_bytes(), &options, None).unwrap();
    let from_compressed = decode_document_bytes(&compressed, &options, None).unwrap();

    assert_eq!(from_text, root);
    assert_eq!(from_compressed, root);
}
