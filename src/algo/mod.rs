//! Mesh reconstruction algorithms.
//!
//! The build stages, in the order [`AutoMesh`](crate::mesh::AutoMesh) runs
//! them:
//!
//! - **Discovery**: find triangle and quad loops in the edge graph
//! - **Winding**: orient every face consistently with its neighbours
//! - **Splitting**: separate points into rendering vertices at hard edges
//! - **Triangulation**: emit triangle indices over rendering vertices
//! - **Normals**: blend flat and smooth normals by edge softness
//!
//! [`morph`] moves the split vertices of a built mesh together. Each stage
//! can also be run by hand on a [`Topology`](crate::mesh::Topology).

pub mod discover;
pub mod morph;
pub mod normals;
pub mod progress;
pub mod split;
pub mod triangulate;
pub mod winding;

pub use progress::Progress;
