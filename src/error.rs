//! Error types for automesh.
//!
//! Input validation failures, structural defects found while reconstructing
//! topology, and export failures all surface as [`MeshError`]. Conditions that
//! are expected during construction (an open boundary edge, a face that has no
//! vertex yet) are reported as `Option::None` by the query that hits them and
//! never reach this type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;

/// Errors that can occur while building, querying, or exporting a mesh.
#[derive(Error, Debug)]
pub enum MeshError {
    /// No input points were supplied.
    #[error("mesh has no points")]
    EmptyMesh,

    /// An edge references a point index that does not exist.
    #[error("edge {edge} references invalid point index {point}")]
    InvalidPointIndex {
        /// The edge index in the input list.
        edge: usize,
        /// The invalid point index.
        point: usize,
    },

    /// An edge connects a point to itself.
    #[error("edge {edge} is degenerate (both ends are the same point)")]
    DegenerateEdge {
        /// The edge index in the input list.
        edge: usize,
    },

    /// The same pair of points was connected twice.
    #[error("edge ({p0}, {p1}) appears more than once")]
    DuplicateEdge {
        /// First point of the edge.
        p0: usize,
        /// Second point of the edge.
        p1: usize,
    },

    /// An edge would be shared by more than two faces.
    #[error("edge ({p0}, {p1}) has more than two incident faces")]
    NonManifoldEdge {
        /// First point of the edge.
        p0: usize,
        /// Second point of the edge.
        p1: usize,
    },

    /// A loop step has no matching mesh edge.
    #[error("no mesh edge connects points {p0} and {p1}")]
    MissingEdge {
        /// First point of the step.
        p0: usize,
        /// Second point of the step.
        p1: usize,
    },

    /// A face was expected to contain an edge but does not.
    #[error("face {face} has no edge between points {p0} and {p1}")]
    MissingFaceEdge {
        /// The face index.
        face: usize,
        /// First point of the edge.
        p0: usize,
        /// Second point of the edge.
        p1: usize,
    },

    /// A previously accepted loop strictly contains a newly accepted one.
    #[error("loop invariant violated: face {face} is a proper subset of an earlier loop")]
    LoopInvariant {
        /// Index the rejected face would have had.
        face: usize,
    },

    /// Face discovery found no triangles or quads.
    #[error("no faces were found in the edge graph")]
    NoFaces,

    /// The point chosen to seed winding resolution has no faces.
    #[error("seed point {point} has no incident faces")]
    NoSeedFace {
        /// The seed point index.
        point: usize,
    },

    /// A face corner index is out of range.
    #[error("face {face} has no corner {corner}")]
    InvalidFaceCorner {
        /// The face index.
        face: usize,
        /// The requested corner.
        corner: usize,
    },

    /// A face corner has no rendering vertex.
    #[error("point {point} has no vertex for face {face}")]
    MissingVertex {
        /// The face index.
        face: usize,
        /// The point index.
        point: usize,
    },

    /// A position buffer does not match the vertex count.
    #[error("expected {expected} vertex positions, got {actual}")]
    PositionCountMismatch {
        /// Number of vertices in the mesh.
        expected: usize,
        /// Number of positions supplied.
        actual: usize,
    },

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error saving mesh to file.
    #[error("failed to save mesh to {path}: {message}")]
    SaveError {
        /// The file path.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// Unsupported file format.
    #[error("unsupported file format: {extension}")]
    UnsupportedFormat {
        /// The file extension.
        extension: String,
    },

    /// Invalid parameter value.
    #[error("invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// The invalid value (as string).
        value: String,
        /// Reason the value is invalid.
        reason: &'static str,
    },
}

impl MeshError {
    /// Create an invalid parameter error.
    pub fn invalid_param<T: std::fmt::Display>(
        name: &'static str,
        value: T,
        reason: &'static str,
    ) -> Self {
        MeshError::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = MeshError::InvalidPointIndex { edge: 3, point: 12 };
        assert_eq!(err.to_string(), "edge 3 references invalid point index 12");

        let err = MeshError::invalid_param("softness", 1.5, "must be in [0, 1]");
        assert_eq!(
            err.to_string(),
            "invalid parameter: softness = 1.5 (must be in [0, 1])"
        );
    }
}
