//! Typed access to members of a parsed JSON object.
//!
//! Every read names the field it is after, so a failure reports which
//! member was missing or had the wrong shape, and where in the document.

use serde_json::{Map, Value};

use crate::error::DecodeError;
use crate::model::{format_path, PathSegment, Position};

// =============================================================================
// OBJECT READER
// =============================================================================

/// Reader over one JSON object node.
///
/// Wraps the object and its path from the document root and provides
/// methods for reading required and optional members.
#[derive(Debug, Clone, Copy)]
pub struct ObjectReader<'a, 'p> {
    object: &'a Map<String, Value>,
    path: &'p [PathSegment],
}

impl<'a, 'p> ObjectReader<'a, 'p> {
    /// Creates a reader, failing if `value` is not a JSON object.
    ///
    /// `field` names the member `value` was read from, for error reporting.
    pub fn new(
        value: &'a Value,
        field: &'static str,
        path: &'p [PathSegment],
    ) -> Result<Self, DecodeError> {
        match value.as_object() {
            Some(object) => Ok(Self { object, path }),
            None => Err(wrong_kind(field, "object", path)),
        }
    }

    /// Returns a member, treating `null` the same as absent.
    pub fn optional(&self, field: &str) -> Option<&'a Value> {
        self.object.get(field).filter(|v| !v.is_null())
    }

    /// Returns a member that must be present.
    ///
    /// A present `null` counts as present; the caller's shape check rejects it.
    pub fn required(&self, field: &'static str) -> Result<&'a Value, DecodeError> {
        self.object.get(field).ok_or_else(|| DecodeError::MissingField {
            field,
            path: format_path(self.path),
        })
    }

    /// Reads a required string member.
    pub fn read_str(&self, field: &'static str) -> Result<&'a str, DecodeError> {
        self.required(field)?
            .as_str()
            .ok_or_else(|| wrong_kind(field, "string", self.path))
    }

    /// Reads a required array member.
    pub fn read_array(&self, field: &'static str) -> Result<&'a [Value], DecodeError> {
        array(self.required(field)?, field, "array", self.path)
    }

    /// Reads a single position (`[x, y, ...]`).
    pub fn read_position(&self, field: &'static str) -> Result<Position, DecodeError> {
        self.read_coordinates(field, "array of numbers", |n, path| number(n, field, path))
    }

    /// Reads a sequence of positions.
    pub fn read_positions(&self, field: &'static str) -> Result<Vec<Position>, DecodeError> {
        self.read_coordinates(field, "array of positions", |p, path| position(p, field, path))
    }

    /// Reads a sequence of position sequences (rings or lines).
    pub fn read_position_lists(
        &self,
        field: &'static str,
    ) -> Result<Vec<Vec<Position>>, DecodeError> {
        self.read_coordinates(field, "array of position arrays", |l, path| {
            positions(l, field, path)
        })
    }

    /// Reads a sequence of polygons' ring lists.
    pub fn read_polygons(
        &self,
        field: &'static str,
    ) -> Result<Vec<Vec<Vec<Position>>>, DecodeError> {
        self.read_coordinates(field, "array of polygons", |rings, path| {
            position_lists(rings, field, path)
        })
    }

    /// Reads a required array member element by element.
    ///
    /// A member that is not an array is reported at this node. Errors inside
    /// it carry the path down to the offending element.
    fn read_coordinates<T>(
        &self,
        field: &'static str,
        expected: &'static str,
        read: impl FnMut(&Value, &mut Vec<PathSegment>) -> Result<T, DecodeError>,
    ) -> Result<Vec<T>, DecodeError> {
        let items = array(self.required(field)?, field, expected, self.path)?;
        let mut path = self.path.to_vec();
        path.push(PathSegment::Key(field));
        each(items, &mut path, read)
    }
}

// =============================================================================
// COORDINATES
// =============================================================================

fn array<'a>(
    value: &'a Value,
    field: &'static str,
    expected: &'static str,
    path: &[PathSegment],
) -> Result<&'a [Value], DecodeError> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| wrong_kind(field, expected, path))
}

fn each<T>(
    items: &[Value],
    path: &mut Vec<PathSegment>,
    mut read: impl FnMut(&Value, &mut Vec<PathSegment>) -> Result<T, DecodeError>,
) -> Result<Vec<T>, DecodeError> {
    let mut out = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        path.push(PathSegment::Index(index));
        let decoded = read(item, path);
        path.pop();
        out.push(decoded?);
    }
    Ok(out)
}

/// Arrays and objects are nesting faults; other scalars are bad numbers.
fn number(value: &Value, field: &'static str, path: &[PathSegment]) -> Result<f64, DecodeError> {
    match value {
        Value::Array(_) | Value::Object(_) => Err(wrong_kind(field, "number", path)),
        other => other.as_f64().ok_or_else(|| DecodeError::MalformedNumber {
            field,
            path: format_path(path),
        }),
    }
}

fn position(
    value: &Value,
    field: &'static str,
    path: &mut Vec<PathSegment>,
) -> Result<Position, DecodeError> {
    let items = array(value, field, "array of numbers", path)?;
    each(items, path, |n, path| number(n, field, path))
}

fn positions(
    value: &Value,
    field: &'static str,
    path: &mut Vec<PathSegment>,
) -> Result<Vec<Position>, DecodeError> {
    let items = array(value, field, "array of positions", path)?;
    each(items, path, |p, path| position(p, field, path))
}

fn position_lists(
    value: &Value,
    field: &'static str,
    path: &mut Vec<PathSegment>,
) -> Result<Vec<Vec<Position>>, DecodeError> {
    let items = array(value, field, "array of position arrays", path)?;
    each(items, path, |list, path| positions(list, field, path))
}

pub(crate) fn wrong_kind(
    field: &'static str,
    expected: &'static str,
    path: &[PathSegment],
) -> DecodeError {
    DecodeError::WrongKind {
        field,
        expected,
        path: format_path(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rejects_non_object() {
        let value = json!([1, 2]);
        let err = ObjectReader::new(&value, "geometry", &[]).unwrap_err();
        assert_eq!(
            err,
            DecodeError::WrongKind {
                field: "geometry",
                expected: "object",
                path: "$".to_string(),
            }
        );
    }

    #[test]
    fn test_optional_treats_null_as_absent() {
        let value = json!({"a": null, "b": 1});
        let reader = ObjectReader::new(&value, "root", &[]).unwrap();
        assert!(reader.optional("a").is_none());
        assert!(reader.optional("missing").is_none());
        assert_eq!(reader.optional("b"), Some(&json!(1)));
    }

    #[test]
    fn test_required_reports_path() {
        let value = json!({});
        let path = [PathSegment::Key("features"), PathSegment::Index(4)];
        let reader = ObjectReader::new(&value, "features", &path).unwrap();
        let err = reader.read_str("type").unwrap_err();
        assert_eq!(
            err,
            DecodeError::MissingField {
                field: "type",
                path: "$.features[4]".to_string(),
            }
        );
    }

    #[test]
    fn test_read_str_wrong_kind() {
        let value = json!({"type": 7});
        let reader = ObjectReader::new(&value, "root", &[]).unwrap();
        assert!(matches!(
            reader.read_str("type"),
            Err(DecodeError::WrongKind { field: "type", expected: "string", .. })
        ));
    }

    #[test]
    fn test_read_coordinates_by_depth() {
        let value = json!({
            "p": [1.0, 2.0, 3.0],
            "line": [[0, 0], [1, 1]],
            "rings": [[[0, 0], [1, 0], [0, 1], [0, 0]]],
            "polys": [[[[0, 0], [1, 1]]], [[[2, 2]]]],
        });
        let reader = ObjectReader::new(&value, "root", &[]).unwrap();

        assert_eq!(reader.read_position("p").unwrap(), vec![1.0, 2.0, 3.0]);
        assert_eq!(
            reader.read_positions("line").unwrap(),
            vec![vec![0.0, 0.0], vec![1.0, 1.0]]
        );
        assert_eq!(reader.read_position_lists("rings").unwrap()[0].len(), 4);
        let polys = reader.read_polygons("polys").unwrap();
        assert_eq!(polys.len(), 2);
        assert_eq!(polys[1], vec![vec![vec![2.0, 2.0]]]);
    }

    #[test]
    fn test_depth_mismatch_is_wrong_kind() {
        let value = json!({"coordinates": [1.0, 2.0]});
        let reader = ObjectReader::new(&value, "root", &[]).unwrap();
        assert_eq!(
            reader.read_positions("coordinates"),
            Err(DecodeError::WrongKind {
                field: "coordinates",
                expected: "array of numbers",
                path: "$.coordinates[0]".to_string(),
            })
        );
    }

    #[test]
    fn test_too_deep_is_wrong_kind() {
        let value = json!({"p": [[1, 2]], "line": [[0, 0], [[1, 1]]], "obj": [{"x": 1}]});
        let reader = ObjectReader::new(&value, "root", &[]).unwrap();
        assert_eq!(
            reader.read_position("p"),
            Err(DecodeError::WrongKind {
                field: "p",
                expected: "number",
                path: "$.p[0]".to_string(),
            })
        );
        assert_eq!(
            reader.read_positions("line"),
            Err(DecodeError::WrongKind {
                field: "line",
                expected: "number",
                path: "$.line[1][0]".to_string(),
            })
        );
        assert!(matches!(
            reader.read_position("obj"),
            Err(DecodeError::WrongKind { expected: "number", .. })
        ));
    }

    #[test]
    fn test_field_not_array_reports_node() {
        let value = json!({"coordinates": 5});
        let path = [PathSegment::Key("geometries"), PathSegment::Index(2)];
        let reader = ObjectReader::new(&value, "geometries", &path).unwrap();
        assert_eq!(
            reader.read_polygons("coordinates"),
            Err(DecodeError::WrongKind {
                field: "coordinates",
                expected: "array of polygons",
                path: "$.geometries[2]".to_string(),
            })
        );
    }

    #[test]
    fn test_non_number_is_malformed() {
        let value = json!({"coordinates": [1.0, "2.0"], "flags": [[0, true]], "gap": [0, null]});
        let reader = ObjectReader::new(&value, "root", &[]).unwrap();
        assert_eq!(
            reader.read_position("coordinates"),
            Err(DecodeError::MalformedNumber {
                field: "coordinates",
                path: "$.coordinates[1]".to_string(),
            })
        );
        assert!(matches!(
            reader.read_positions("flags"),
            Err(DecodeError::MalformedNumber { field: "flags", .. })
        ));
        assert!(matches!(
            reader.read_position("gap"),
            Err(DecodeError::MalformedNumber { field: "gap", .. })
        ));
    }
}
