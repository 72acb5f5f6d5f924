//! Graph nodes: input positions with their adjacency.

use nalgebra::Point3;

use super::index::{EdgeId, FaceId, VertexId};

/// An input point and the elements that touch it.
///
/// The position never changes after construction. The id lists behave as
/// insertion-ordered sets and only grow while the mesh is being built.
#[derive(Debug, Clone)]
pub struct Point {
    /// The 3D position of this point.
    pub position: Point3<f64>,

    pub(crate) edges: Vec<EdgeId>,
    pub(crate) faces: Vec<FaceId>,
    pub(crate) vertices: Vec<VertexId>,
}

impl Point {
    /// Create an unconnected point at the given position.
    pub fn new(position: Point3<f64>) -> Self {
        Self {
            position,
            edges: Vec::new(),
            faces: Vec::new(),
            vertices: Vec::new(),
        }
    }

    /// Mesh edges incident to this point, in input order.
    #[inline]
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Faces incident to this point, in discovery order.
    #[inline]
    pub fn faces(&self) -> &[FaceId] {
        &self.faces
    }

    /// Rendering vertices split from this point, in creation order.
    #[inline]
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    /// Whether `edge` is incident to this point.
    #[inline]
    pub fn has_edge(&self, edge: EdgeId) -> bool {
        self.edges.contains(&edge)
    }

    pub(crate) fn add_edge(&mut self, edge: EdgeId) {
        if !self.edges.contains(&edge) {
            self.edges.push(edge);
        }
    }

    pub(crate) fn add_face(&mut self, face: FaceId) {
        if !self.faces.contains(&face) {
            self.faces.push(face);
        }
    }

    pub(crate) fn add_vertex(&mut self, vertex: VertexId) {
        if !self.vertices.contains(&vertex) {
            self.vertices.push(vertex);
        }
    }
}
