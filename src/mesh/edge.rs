//! Input edges, shared mesh edges, and face-local directed edges.
//!
//! - [`Edge`] is what callers supply: two point indices and a softness.
//! - [`MeshEdge`] is the undirected topological edge shared by up to two faces.
//! - [`FaceEdge`] is one face's directed view of a [`MeshEdge`]. Its direction
//!   can be reversed without affecting the shared edge or the other face.

use super::index::{EdgeId, FaceId, PointId};
use super::pair::Pair;
use crate::error::{MeshError, Result};

/// An undirected input edge between two points.
///
/// Softness controls shading across the edge: `0.0` keeps the adjacent faces
/// faceted, `1.0` blends them smoothly, and values in between blend partially.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// First point index.
    pub p0: usize,
    /// Second point index.
    pub p1: usize,
    /// Softness in `[0, 1]`.
    pub softness: f64,
}

impl Edge {
    /// A hard (faceted) edge.
    pub fn hard(p0: usize, p1: usize) -> Self {
        Self::semi(p0, p1, 0.0)
    }

    /// A fully soft (smooth) edge.
    pub fn soft(p0: usize, p1: usize) -> Self {
        Self::semi(p0, p1, 1.0)
    }

    /// An edge with arbitrary softness.
    ///
    /// The endpoints are stored sorted.
    pub fn semi(p0: usize, p1: usize, softness: f64) -> Self {
        let pair = Pair::new_sorted(p0, p1);
        Self {
            p0: pair.p0,
            p1: pair.p1,
            softness,
        }
    }
}

/// A topological edge shared by at most two faces.
#[derive(Debug, Clone)]
pub struct MeshEdge {
    pub(crate) points: Pair<PointId>,
    pub(crate) softness: f64,
    pub(crate) faces: [Option<FaceId>; 2],
}

impl MeshEdge {
    pub(crate) fn new(p0: PointId, p1: PointId, softness: f64) -> Self {
        Self {
            points: Pair::new_sorted(p0, p1),
            softness,
            faces: [None, None],
        }
    }

    /// The endpoints in canonical (sorted) order.
    #[inline]
    pub fn points(&self) -> Pair<PointId> {
        self.points
    }

    /// Edge softness in `[0, 1]`.
    #[inline]
    pub fn softness(&self) -> f64 {
        self.softness
    }

    /// Faces attached so far, in attachment order.
    pub fn faces(&self) -> impl Iterator<Item = FaceId> + '_ {
        self.faces.iter().flatten().copied()
    }

    /// Whether two faces share this edge.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.faces[0].is_some() && self.faces[1].is_some()
    }

    /// Whether exactly one face uses this edge (an open mesh boundary).
    #[inline]
    pub fn is_boundary(&self) -> bool {
        self.faces[0].is_some() && self.faces[1].is_none()
    }

    /// Whether `p` is one of the endpoints.
    #[inline]
    pub fn contains(&self, p: PointId) -> bool {
        self.points.contains(p)
    }

    /// The endpoint opposite `p`.
    #[inline]
    pub fn next(&self, p: PointId) -> PointId {
        self.points.next(p)
    }

    /// The face on the other side of this edge from `face`.
    ///
    /// `None` means the edge is a boundary, which is a normal condition for
    /// open meshes.
    pub fn next_face(&self, face: FaceId) -> Option<FaceId> {
        match self.faces {
            [Some(first), second] if first == face => second,
            [first, _] => first,
        }
    }

    pub(crate) fn add_face(&mut self, face: FaceId) -> Result<()> {
        match self.faces {
            [None, _] => self.faces[0] = Some(face),
            [Some(_), None] => self.faces[1] = Some(face),
            [Some(_), Some(_)] => {
                return Err(MeshError::NonManifoldEdge {
                    p0: self.points.p0.index(),
                    p1: self.points.p1.index(),
                })
            }
        }
        Ok(())
    }
}

/// A face's directed view of a [`MeshEdge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceEdge {
    /// The shared edge this view refers to.
    pub edge: EdgeId,
    /// Direction of travel around the owning face.
    pub points: Pair<PointId>,
}

impl FaceEdge {
    pub(crate) fn new(p0: PointId, p1: PointId, edge: EdgeId) -> Self {
        Self {
            edge,
            points: Pair::new(p0, p1),
        }
    }

    /// Start point.
    #[inline]
    pub fn p0(&self) -> PointId {
        self.points.p0
    }

    /// End point.
    #[inline]
    pub fn p1(&self) -> PointId {
        self.points.p1
    }

    pub(crate) fn reverse(&mut self) {
        self.points = self.points.reversed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(i: usize) -> PointId {
        PointId::new(i)
    }

    #[test]
    fn test_edge_constructors() {
        let hard = Edge::hard(3, 1);
        assert_eq!((hard.p0, hard.p1), (1, 3));
        assert_eq!(hard.softness, 0.0);

        assert_eq!(Edge::soft(0, 1).softness, 1.0);
        assert_eq!(Edge::semi(0, 1, 0.25).softness, 0.25);
    }

    #[test]
    fn test_mesh_edge_faces() {
        let mut edge = MeshEdge::new(pid(5), pid(2), 0.0);
        assert_eq!(edge.points(), Pair::new(pid(2), pid(5)));
        assert!(!edge.is_complete());
        assert_eq!(edge.next_face(FaceId::new(0)), None);

        edge.add_face(FaceId::new(0)).unwrap();
        assert!(edge.is_boundary());
        assert_eq!(edge.next_face(FaceId::new(0)), None);

        edge.add_face(FaceId::new(1)).unwrap();
        assert!(edge.is_complete());
        assert!(!edge.is_boundary());
        assert_eq!(edge.next_face(FaceId::new(0)), Some(FaceId::new(1)));
        assert_eq!(edge.next_face(FaceId::new(1)), Some(FaceId::new(0)));
        assert_eq!(edge.faces().count(), 2);
    }

    #[test]
    fn test_third_face_is_rejected() {
        let mut edge = MeshEdge::new(pid(0), pid(1), 1.0);
        edge.add_face(FaceId::new(0)).unwrap();
        edge.add_face(FaceId::new(1)).unwrap();

        let err = edge.add_face(FaceId::new(2)).unwrap_err();
        assert!(matches!(err, MeshError::NonManifoldEdge { p0: 0, p1: 1 }));
    }

    #[test]
    fn test_face_edge_reverse() {
        let mut fe = FaceEdge::new(pid(4), pid(9), EdgeId::new(0));
        fe.reverse();
        assert_eq!((fe.p0(), fe.p1()), (pid(9), pid(4)));
        assert_eq!(fe.edge, EdgeId::new(0));
    }
}
