//! Feature and FeatureCollection decoding/encoding.

use log::{debug, trace};
use serde_json::{Map, Value};

use crate::codec::document::DecodeOptions;
use crate::codec::geometry::{decode_geometry_at, encode_geometry};
use crate::codec::primitives::ObjectReader;
use crate::codec::value::{decode_properties, encode_properties, json_kind};
use crate::error::{DecodeError, EncodeError};
use crate::model::{format_path, Feature, PathSegment};

/// Progress hook invoked once per decoded feature node.
///
/// Receives the node's path from the document root and the finished node.
/// Children are always reported before their parent.
pub type ProgressFn<'f> = dyn FnMut(&[PathSegment], &Feature) + 'f;

// =============================================================================
// DECODING
// =============================================================================

/// Decodes a Feature or FeatureCollection with default options.
pub fn decode_feature(value: &Value) -> Result<Feature, DecodeError> {
    decode_feature_with(value, &DecodeOptions::default(), None)
}

/// Decodes a Feature or FeatureCollection.
///
/// The decode is all-or-nothing: the first failing node aborts it and no
/// partial tree is returned. `progress` may already have seen nodes decoded
/// before the failure.
pub fn decode_feature_with(
    value: &Value,
    options: &DecodeOptions,
    progress: Option<&mut ProgressFn<'_>>,
) -> Result<Feature, DecodeError> {
    let mut decoder = FeatureDecoder {
        options,
        progress,
        path: Vec::new(),
    };
    decoder.decode(value, "root", 0)
}

struct FeatureDecoder<'o, 'p, 'f> {
    options: &'o DecodeOptions,
    progress: Option<&'p mut ProgressFn<'f>>,
    path: Vec<PathSegment>,
}

impl FeatureDecoder<'_, '_, '_> {
    fn decode(&mut self, value: &Value, field: &'static str, depth: usize) -> Result<Feature, DecodeError> {
        if depth > self.options.max_depth {
            return Err(DecodeError::NestingTooDeep {
                max: self.options.max_depth,
                path: format_path(&self.path),
            });
        }

        let reader = ObjectReader::new(value, field, &self.path)?;
        let type_name = reader.read_str("type")?;
        let id = decode_id(reader.optional("id"));
        let properties = decode_properties(reader.optional("properties"));

        let feature = match type_name {
            "Feature" => {
                let geometry = match reader.optional("geometry") {
                    Some(geometry) => {
                        self.path.push(PathSegment::Key("geometry"));
                        let decoded =
                            decode_geometry_at(geometry, "geometry", &mut self.path, 0, self.options);
                        self.path.pop();
                        Some(decoded?)
                    }
                    None => None,
                };
                Feature::Feature {
                    geometry,
                    properties,
                    id,
                }
            }
            "FeatureCollection" => {
                let members = reader.read_array("features")?;
                let mut features = Vec::with_capacity(members.len());
                self.path.push(PathSegment::Key("features"));
                for (index, member) in members.iter().enumerate() {
                    self.path.push(PathSegment::Index(index));
                    let child = self.decode(member, "features", depth + 1);
                    self.path.pop();
                    features.push(child?);
                }
                self.path.pop();
                Feature::FeatureCollection {
                    features,
                    properties,
                    id,
                }
            }
            other => {
                return Err(DecodeError::InvalidFeatureType {
                    found: other.to_string(),
                });
            }
        };

        trace!("decoded {} at {}", feature.type_name(), format_path(&self.path));
        if let Some(progress) = self.progress.as_deref_mut() {
            progress(self.path.as_slice(), &feature);
        }
        Ok(feature)
    }
}

/// Reads an optional string id. Any other JSON kind is dropped.
fn decode_id(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(id) => Some(id.clone()),
        other => {
            debug!("ignoring non-string feature id ({})", json_kind(other));
            None
        }
    }
}

// =============================================================================
// ENCODING
// =============================================================================

/// Encodes a feature tree as GeoJSON.
///
/// A collection's `properties` member is written only when non-empty, since
/// RFC 7946 collections do not carry one.
pub fn encode_feature(feature: &Feature) -> Result<Value, EncodeError> {
    let mut object = Map::new();
    object.insert("type".to_string(), Value::String(feature.type_name().to_string()));

    match feature {
        Feature::Feature {
            geometry,
            properties,
            ..
        } => {
            let geometry = match geometry {
                Some(geometry) => encode_geometry(geometry)?,
                None => Value::Null,
            };
            object.insert("geometry".to_string(), geometry);
            object.insert("properties".to_string(), Value::Object(encode_properties(properties)?));
        }
        Feature::FeatureCollection {
            features,
            properties,
            ..
        } => {
            let features = features
                .iter()
                .map(encode_feature)
                .collect::<Result<_, _>>()?;
            object.insert("features".to_string(), Value::Array(features));
            if !properties.is_empty() {
                object.insert("properties".to_string(), Value::Object(encode_properties(properties)?));
            }
        }
    }

    if let Some(id) = feature.id() {
        object.insert("id".to_string(), Value::String(id.to_string()));
    }

    Ok(Value::Object(object))
}
