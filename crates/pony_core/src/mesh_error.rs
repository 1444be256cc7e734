//! Mesh error types
//!
//! Returned when a mesh edit would leave triangles or per-vertex attributes inconsistent with
//! the vertex list.

use std::fmt;

/// Error type for mesh construction and edits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// A triangle refers to a vertex that does not exist
    IndexOutOfRange {
        triangle: usize,
        index: u32,
        vertex_count: usize,
    },
    /// A per-vertex attribute array does not have one entry per vertex
    AttributeCountMismatch {
        attribute: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshError::IndexOutOfRange {
                triangle,
                index,
                vertex_count,
            } => write!(
                f,
                "Triangle {} index out of range: {} (vertex count {})",
                triangle, index, vertex_count
            ),
            MeshError::AttributeCountMismatch {
                attribute,
                expected,
                actual,
            } => write!(
                f,
                "Mesh {} count mismatch: expected {}, got {}",
                attribute, expected, actual
            ),
        }
    }
}

impl std::error::Error for MeshError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_range_display() {
        let err = MeshError::IndexOutOfRange {
            triangle: 2,
            index: 9,
            vertex_count: 4,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("out of range"));
        assert!(msg.contains("Triangle 2"));
        assert!(msg.contains("9"));
    }

    #[test]
    fn test_count_mismatch_display() {
        let err = MeshError::AttributeCountMismatch {
            attribute: "colors",
            expected: 4,
            actual: 3,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("colors"));
        assert!(msg.contains("expected 4, got 3"));
    }

    #[test]
    fn test_error_source() {
        use std::error::Error;

        let err = MeshError::AttributeCountMismatch {
            attribute: "uvs",
            expected: 1,
            actual: 0,
        };
        assert!(err.source().is_none());
    }

    #[test]
    fn test_debug_format() {
        let err = MeshError::IndexOutOfRange {
            triangle: 0,
            index: 3,
            vertex_count: 3,
        };
        let debug = format!("{:?}", err);
        assert!(debug.contains("IndexOutOfRange"));
    }
}
