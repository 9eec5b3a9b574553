//! Features and feature collections.

use crate::model::{Geometry, Properties};

/// A node of the decoded document tree.
///
/// A collection owns its children; the tree has no sharing and no cycles.
#[derive(Debug, Clone, PartialEq)]
pub enum Feature {
    /// A single feature. `geometry` is `None` for an unlocated feature.
    Feature {
        geometry: Option<Geometry>,
        properties: Properties,
        id: Option<String>,
    },
    /// An ordered collection of features.
    FeatureCollection {
        features: Vec<Feature>,
        properties: Properties,
        id: Option<String>,
    },
}

impl Feature {
    pub fn id(&self) -> Option<&str> {
        match self {
            Feature::Feature { id, .. } | Feature::FeatureCollection { id, .. } => id.as_deref(),
        }
    }

    pub fn properties(&self) -> &Properties {
        match self {
            Feature::Feature { properties, .. } | Feature::FeatureCollection { properties, .. } => {
                properties
            }
        }
    }

    /// Returns the `type` discriminator for this node.
    pub fn type_name(&self) -> &'static str {
        match self {
            Feature::Feature { .. } => "Feature",
            Feature::FeatureCollection { .. } => "FeatureCollection",
        }
    }

    /// Number of nodes in this subtree, this node included.
    pub fn node_count(&self) -> usize {
        match self {
            Feature::Feature { .. } => 1,
            Feature::FeatureCollection { features, .. } => {
                1 + features.iter().map(Feature::node_count).sum::<usize>()
            }
        }
    }

    /// Geometries of all leaf features in document order.
    ///
    /// Leaves without a geometry are skipped.
    pub fn geometries(&self) -> Vec<&Geometry> {
        let mut out = Vec::new();
        collect_geometries(self, &mut out);
        out
    }
}

fn collect_geometries<'a>(feature: &'a Feature, out: &mut Vec<&'a Geometry>) {
    match feature {
        Feature::Feature { geometry, .. } => out.extend(geometry.as_ref()),
        Feature::FeatureCollection { features, .. } => {
            for child in features {
                collect_geometries(child, out);
            }
        }
    }
}
