//! Discovered faces: closed cycles of three or four directed edges.

use super::edge::FaceEdge;
use super::index::PointId;
use super::pair::Pair;

/// A triangle or quad bounded by mesh edges.
///
/// Consecutive face edges share endpoints, so `edges[i].p1() == edges[i + 1].p0()`
/// and the last edge ends where the first begins. The edge order encodes the
/// winding. It can be reversed once, when the winding is resolved.
#[derive(Debug, Clone)]
pub struct Face {
    pub(crate) edges: Vec<FaceEdge>,
    pub(crate) winding_set: bool,
}

impl Face {
    pub(crate) fn new(edges: Vec<FaceEdge>) -> Self {
        debug_assert!(
            edges.len() == 3 || edges.len() == 4,
            "faces must have 3 or 4 edges"
        );
        Self {
            edges,
            winding_set: false,
        }
    }

    /// Boundary edges in winding order.
    #[inline]
    pub fn edges(&self) -> &[FaceEdge] {
        &self.edges
    }

    /// Number of corners (3 or 4).
    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Faces always have at least three corners.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Whether this face is a quad.
    #[inline]
    pub fn is_quad(&self) -> bool {
        self.edges.len() == 4
    }

    /// Corner points in winding order.
    pub fn points(&self) -> impl Iterator<Item = PointId> + '_ {
        self.edges.iter().map(|e| e.p0())
    }

    /// Whether the winding has been resolved.
    #[inline]
    pub fn is_winding_set(&self) -> bool {
        self.winding_set
    }

    /// The face edge joining the same two points as `edge`, in either direction.
    pub fn like_edge(&self, edge: Pair<PointId>) -> Option<&FaceEdge> {
        self.edges.iter().find(|fe| fe.points.is_like(edge))
    }

    /// Resolve the winding, reversing the cycle if `reverse` is set.
    ///
    /// Only the first call has any effect. Returns whether this call resolved
    /// the face.
    pub(crate) fn set_winding(&mut self, reverse: bool) -> bool {
        if self.winding_set {
            return false;
        }
        self.winding_set = true;

        if reverse {
            for edge in &mut self.edges {
                edge.reverse();
            }
            self.edges.reverse();
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::index::EdgeId;

    fn triangle() -> Face {
        let p = |i| PointId::new(i);
        Face::new(vec![
            FaceEdge::new(p(0), p(1), EdgeId::new(0)),
            FaceEdge::new(p(1), p(2), EdgeId::new(1)),
            FaceEdge::new(p(2), p(0), EdgeId::new(2)),
        ])
    }

    fn is_closed_cycle(face: &Face) -> bool {
        let n = face.len();
        (0..n).all(|i| face.edges[i].p1() == face.edges[(i + 1) % n].p0())
    }

    #[test]
    fn test_reverse_keeps_cycle_closed() {
        let mut face = triangle();
        assert!(face.set_winding(true));
        assert!(is_closed_cycle(&face));

        let points: Vec<usize> = face.points().map(|p| p.index()).collect();
        assert_eq!(points, vec![0, 2, 1]);
    }

    #[test]
    fn test_winding_set_once() {
        let mut face = triangle();
        assert!(face.set_winding(false));
        assert!(face.is_winding_set());

        // A second request must not flip an already resolved face.
        assert!(!face.set_winding(true));
        let points: Vec<usize> = face.points().map(|p| p.index()).collect();
        assert_eq!(points, vec![0, 1, 2]);
    }

    #[test]
    fn test_like_edge() {
        let face = triangle();
        let p = |i| PointId::new(i);

        let found = face.like_edge(Pair::new(p(1), p(0))).unwrap();
        assert_eq!(found.points, Pair::new(p(0), p(1)));
        assert!(face.like_edge(Pair::new(p(0), p(3))).is_none());
    }
}
