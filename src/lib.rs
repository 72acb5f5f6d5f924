//! # AutoMesh
//!
//! Reconstructs renderable triangle meshes from a bare point/edge graph.
//!
//! Modelling by hand is often easiest as a wireframe: place points, join them
//! with edges, and mark which edges should look sharp. AutoMesh turns such a
//! wireframe into vertex, normal and index buffers ready for a GPU.
//!
//! ## Features
//!
//! - **Face discovery**: triangle and quad faces are found from edges alone
//! - **Consistent winding**: faces are oriented outward from a single seed
//! - **Soft and hard edges**: each edge carries a softness that controls
//!   whether the faces beside it share a smooth normal or show a crease
//! - **Morphing**: deform the points and get fresh normals without rebuilding
//! - **Export**: OBJ, PLY and STL
//!
//! ## Quick Start
//!
//! ```
//! use automesh::prelude::*;
//! use nalgebra::Point3;
//!
//! // A tetrahedron with one soft edge.
//! let points = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.5, 0.0, 1.0),
//!     Point3::new(0.5, 1.0, 0.5),
//! ];
//! let edges = vec![
//!     Edge::hard(0, 1),
//!     Edge::hard(1, 2),
//!     Edge::hard(2, 0),
//!     Edge::soft(0, 3),
//!     Edge::hard(1, 3),
//!     Edge::hard(2, 3),
//! ];
//!
//! let mesh = AutoMesh::build(&points, &edges, &AutoMeshOptions::default()).unwrap();
//! assert_eq!(mesh.topology().num_faces(), 4);
//! assert_eq!(mesh.indices().len(), 12);
//! assert_eq!(mesh.positions().len(), mesh.normals().len());
//! ```
//!
//! ## Morphing
//!
//! ```
//! use automesh::shapes;
//! use nalgebra::Point3;
//!
//! let mesh = shapes::cube().build().unwrap();
//!
//! // Stretch along y; indices are reused, normals are recomputed.
//! let tall = mesh.morph(|p, _| Point3::new(p.x, p.y * 2.0, p.z));
//! assert_eq!(tall.indices, mesh.indices());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod error;
pub mod io;
pub mod mesh;
pub mod shapes;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use automesh::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{MeshError, Result};
    pub use crate::mesh::{
        AutoMesh, AutoMeshOptions, Edge, EdgeId, FaceId, PointId, RenderMesh, Topology, VertexId,
    };
}

// Re-export nalgebra types for convenience
pub use nalgebra;
