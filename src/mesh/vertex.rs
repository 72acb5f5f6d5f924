//! Rendering vertices split from points.

use super::index::{FaceId, PointId};

/// A point as seen by a group of its faces.
///
/// Faces that meet across fully soft edges share one vertex and therefore one
/// blended normal. Faces separated by harder edges get their own vertex. All
/// vertices of a point share the point's position.
#[derive(Debug, Clone)]
pub struct Vertex {
    pub(crate) point: PointId,
    pub(crate) faces: Vec<FaceId>,
}

impl Vertex {
    pub(crate) fn new(point: PointId, face: FaceId) -> Self {
        Self {
            point,
            faces: vec![face],
        }
    }

    /// The point this vertex was split from.
    #[inline]
    pub fn point(&self) -> PointId {
        self.point
    }

    /// Faces represented by this vertex.
    #[inline]
    pub fn faces(&self) -> &[FaceId] {
        &self.faces
    }

    /// Whether `face` is represented by this vertex.
    #[inline]
    pub fn is_shared_by(&self, face: FaceId) -> bool {
        self.faces.contains(&face)
    }

    pub(crate) fn add_face(&mut self, face: FaceId) {
        if !self.faces.contains(&face) {
            self.faces.push(face);
        }
    }
}
