//! Arena storage for the reconstructed mesh graph.
//!
//! [`Topology`] owns one table per entity type (points, mesh edges, faces, and
//! rendering vertices). Cross references are indices into those tables.
//!
//! # Structure
//!
//! - Each point lists its incident edges, faces, and split vertices
//! - Each mesh edge is keyed by its sorted endpoint pair and lists up to two faces
//! - Each face lists its directed boundary edges in winding order
//! - Each vertex lists the subset of its point's faces it represents
//!
//! Construction happens in stages (see [`crate::algo`]). Once an
//! [`AutoMesh`](super::AutoMesh) has been built the topology is frozen and only
//! read.

use std::collections::HashMap;

use nalgebra::Point3;

use super::edge::{Edge, FaceEdge, MeshEdge};
use super::face::Face;
use super::index::{EdgeId, FaceId, PointId, VertexId};
use super::pair::Pair;
use super::point::Point;
use super::vertex::Vertex;
use crate::error::{MeshError, Result};

/// The point/edge/face/vertex graph of a mesh.
#[derive(Debug, Clone, Default)]
pub struct Topology {
    pub(crate) points: Vec<Point>,
    pub(crate) edges: Vec<MeshEdge>,
    pub(crate) edge_lookup: HashMap<Pair<PointId>, EdgeId>,
    pub(crate) faces: Vec<Face>,
    pub(crate) vertices: Vec<Vertex>,
}

impl Topology {
    /// Create the point and edge tables from raw input.
    ///
    /// Faces and vertices are filled in by the later build stages.
    ///
    /// # Errors
    ///
    /// Fails if there are no points, or if an edge references a missing point,
    /// joins a point to itself, repeats an earlier edge, or has a softness
    /// outside `[0, 1]`.
    pub fn from_input(positions: &[Point3<f64>], edges: &[Edge]) -> Result<Self> {
        if positions.is_empty() {
            return Err(MeshError::EmptyMesh);
        }

        let mut topology = Topology {
            points: positions.iter().map(|&p| Point::new(p)).collect(),
            edges: Vec::with_capacity(edges.len()),
            edge_lookup: HashMap::with_capacity(edges.len()),
            faces: Vec::new(),
            vertices: Vec::new(),
        };

        for (ei, edge) in edges.iter().enumerate() {
            for p in [edge.p0, edge.p1] {
                if p >= positions.len() {
                    return Err(MeshError::InvalidPointIndex { edge: ei, point: p });
                }
            }
            if edge.p0 == edge.p1 {
                return Err(MeshError::DegenerateEdge { edge: ei });
            }
            if !(0.0..=1.0).contains(&edge.softness) {
                return Err(MeshError::invalid_param(
                    "softness",
                    edge.softness,
                    "must be in [0, 1]",
                ));
            }

            let key = Pair::new_sorted(PointId::new(edge.p0), PointId::new(edge.p1));
            if topology.edge_lookup.contains_key(&key) {
                return Err(MeshError::DuplicateEdge {
                    p0: key.p0.index(),
                    p1: key.p1.index(),
                });
            }

            let id = EdgeId::new(topology.edges.len());
            topology.edges.push(MeshEdge::new(key.p0, key.p1, edge.softness));
            topology.edge_lookup.insert(key, id);
            topology.points[key.p0.index()].add_edge(id);
            topology.points[key.p1.index()].add_edge(id);
        }

        Ok(topology)
    }

    // ==================== Accessors ====================

    /// Get the number of points.
    #[inline]
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Get the number of mesh edges.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Get the number of faces.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Get the number of rendering vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Get a point by ID.
    #[inline]
    pub fn point(&self, id: PointId) -> &Point {
        &self.points[id.index()]
    }

    /// Get a mesh edge by ID.
    #[inline]
    pub fn edge(&self, id: EdgeId) -> &MeshEdge {
        &self.edges[id.index()]
    }

    /// Get a face by ID.
    #[inline]
    pub fn face(&self, id: FaceId) -> &Face {
        &self.faces[id.index()]
    }

    /// Get a vertex by ID.
    #[inline]
    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.index()]
    }

    /// Get the position of a point.
    #[inline]
    pub fn position(&self, id: PointId) -> &Point3<f64> {
        &self.point(id).position
    }

    // ==================== Iteration ====================

    /// Iterate over all point IDs.
    pub fn point_ids(&self) -> impl Iterator<Item = PointId> + '_ {
        (0..self.points.len()).map(PointId::new)
    }

    /// Iterate over all edge IDs.
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        (0..self.edges.len()).map(EdgeId::new)
    }

    /// Iterate over all face IDs.
    pub fn face_ids(&self) -> impl Iterator<Item = FaceId> + '_ {
        (0..self.faces.len()).map(FaceId::new)
    }

    /// Iterate over all vertex IDs.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.vertices.len()).map(VertexId::new)
    }

    // ==================== Topology Queries ====================

    /// Look up the mesh edge joining two points, in either order.
    pub fn edge_between(&self, a: PointId, b: PointId) -> Option<EdgeId> {
        self.edge_lookup.get(&Pair::new_sorted(a, b)).copied()
    }

    /// The vertex of `point` that represents `face`.
    ///
    /// `None` when `face` is `None` (no neighbor across a boundary) or when no
    /// vertex of the point has claimed the face yet. Both are expected while
    /// vertices are being split.
    pub fn vertex_for(&self, point: PointId, face: Option<FaceId>) -> Option<VertexId> {
        let face = face?;
        self.point(point)
            .vertices
            .iter()
            .copied()
            .find(|&v| self.vertex(v).is_shared_by(face))
    }

    /// The rendering vertex at corner `corner` of `face`.
    ///
    /// # Errors
    ///
    /// Fails if the corner is out of range or no vertex represents the face at
    /// that corner. Both indicate a defect in the earlier build stages.
    pub fn face_vertex(&self, face: FaceId, corner: usize) -> Result<VertexId> {
        let f = self.face(face);
        let edge = f.edges.get(corner).ok_or(MeshError::InvalidFaceCorner {
            face: face.index(),
            corner,
        })?;
        self.vertex_for(edge.p0(), Some(face))
            .ok_or(MeshError::MissingVertex {
                face: face.index(),
                point: edge.p0().index(),
            })
    }

    /// The face edge of `face` joining the same points as `edge`.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::MissingFaceEdge`] if the face does not use that edge.
    pub fn like_edge(&self, face: FaceId, edge: Pair<PointId>) -> Result<FaceEdge> {
        self.face(face)
            .like_edge(edge)
            .copied()
            .ok_or(MeshError::MissingFaceEdge {
                face: face.index(),
                p0: edge.p0.index(),
                p1: edge.p1.index(),
            })
    }

    /// Mesh edges used by exactly one face.
    pub fn boundary_edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edge_ids().filter(|&e| self.edge(e).is_boundary())
    }

    /// Whether every edge used by a face is shared by two faces.
    pub fn is_closed(&self) -> bool {
        !self.faces.is_empty() && self.boundary_edges().next().is_none()
    }

    /// Faces whose winding was never resolved.
    ///
    /// These are faces outside the connected component of the winding seed.
    pub fn unresolved_faces(&self) -> impl Iterator<Item = FaceId> + '_ {
        self.face_ids().filter(|&f| !self.face(f).is_winding_set())
    }

    /// Whether every pair of resolved faces sharing an edge traverses it in
    /// opposite directions.
    pub fn is_winding_consistent(&self) -> bool {
        self.edges.iter().all(|edge| {
            let [Some(a), Some(b)] = edge.faces else {
                return true;
            };
            let (fa, fb) = (self.face(a), self.face(b));
            if !fa.is_winding_set() || !fb.is_winding_set() {
                return true;
            }
            match (fa.like_edge(edge.points), fb.like_edge(edge.points)) {
                (Some(ea), Some(eb)) => ea.points == eb.points.reversed(),
                _ => false,
            }
        })
    }

    /// Mean position of all points.
    pub fn centroid(&self) -> Point3<f64> {
        centroid(self.points.iter().map(|p| &p.position))
    }

    /// Mean position of a face's corners.
    pub fn face_centroid(&self, face: FaceId) -> Point3<f64> {
        centroid(self.face(face).points().map(|p| self.position(p)))
    }

    // ==================== Construction ====================

    pub(crate) fn add_vertex(&mut self, point: PointId, face: FaceId) -> VertexId {
        let id = VertexId::new(self.vertices.len());
        self.vertices.push(Vertex::new(point, face));
        self.points[point.index()].add_vertex(id);
        id
    }
}

fn centroid<'a>(positions: impl Iterator<Item = &'a Point3<f64>>) -> Point3<f64> {
    let mut sum = nalgebra::Vector3::zeros();
    let mut count = 0usize;
    for p in positions {
        sum += p.coords;
        count += 1;
    }
    if count == 0 {
        return Point3::origin();
    }
    Point3::from(sum / count as f64)
}
