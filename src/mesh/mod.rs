//! Core mesh data structures.
//!
//! This module provides the point/edge graph that meshes are reconstructed
//! from, and the rendering mesh that comes out.
//!
//! # Overview
//!
//! The primary type is [`AutoMesh`]. It takes a set of points and edges
//! (each edge with a softness between 0 and 1), finds the triangle and quad
//! faces they enclose, and produces vertex, normal and index buffers. Hard
//! edges become creases, soft edges shade smoothly.
//!
//! The intermediate graph is kept in a [`Topology`] and can be inspected after
//! construction.
//!
//! # Index Types
//!
//! Graph elements are identified by type-safe index wrappers:
//! - [`PointId`] - Identifies an input point
//! - [`EdgeId`] - Identifies a mesh edge
//! - [`FaceId`] - Identifies a discovered face
//! - [`VertexId`] - Identifies a rendering vertex
//!
//! # Construction
//!
//! ```
//! use automesh::mesh::{AutoMesh, AutoMeshOptions, Edge};
//! use nalgebra::Point3;
//!
//! let points = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(1.0, 1.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ];
//! let edges = vec![
//!     Edge::hard(0, 1),
//!     Edge::hard(1, 2),
//!     Edge::hard(2, 3),
//!     Edge::hard(3, 0),
//!     Edge::soft(0, 2),
//! ];
//!
//! let mesh = AutoMesh::build(&points, &edges, &AutoMeshOptions::default()).unwrap();
//! assert_eq!(mesh.topology().num_faces(), 2);
//! // The soft diagonal shares its vertices between both triangles.
//! assert_eq!(mesh.num_vertices(), 4);
//! ```

mod builder;
mod edge;
mod face;
mod index;
mod pair;
mod point;
mod topology;
mod vertex;

pub use builder::{AutoMesh, AutoMeshOptions, RenderMesh};
pub use edge::{Edge, FaceEdge, MeshEdge};
pub use face::Face;
pub use index::{EdgeId, FaceId, PointId, VertexId};
pub use pair::Pair;
pub use point::Point;
pub use topology::Topology;
pub use vertex::Vertex;
