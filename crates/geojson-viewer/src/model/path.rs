//! Structural paths from the document root to a node.

use std::fmt;

/// One step of a path: an object member or an array element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathSegment {
    Key(&'static str),
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => write!(f, ".{key}"),
            PathSegment::Index(index) => write!(f, "[{index}]"),
        }
    }
}

/// Renders a path in `$.features[1].geometry` notation.
///
/// The empty path is the document root, `$`.
pub fn format_path(path: &[PathSegment]) -> String {
    let mut out = String::from("$");
    for segment in path {
        out.push_str(&segment.to_string());
    }
    out
}
