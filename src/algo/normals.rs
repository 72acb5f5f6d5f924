//! Soft/hard edge normal blending.
//!
//! Normals are evaluated late and decoupled from topology. They take vertex
//! positions as input, so a morphed pose reuses the same faces and vertices.
//!
//! For each rendering vertex:
//!
//! 1. Each face contributes its flat normal once per boundary edge that
//!    touches the vertex's point.
//! 2. Each contribution is blended toward the point's smooth normal (the mean
//!    of all its face normals) by the softness of that edge:
//!    `face_n * (1 - s) + point_n * s`.
//! 3. The contributions are averaged.
//!
//! Hard edges (`s = 0`) reproduce the flat face normal and fully soft edges
//! (`s = 1`) the smooth point normal. Partial softness shades in between
//! without splitting the vertex. The average is not renormalized.

use nalgebra::{Point3, Vector3};
use rayon::prelude::*;

use crate::error::Result;
use crate::mesh::{EdgeId, FaceId, PointId, Topology, VertexId};

use super::winding::normalized_or_zero;

/// Rendering vertices at the first three corners of every face.
///
/// Computed once after splitting. Normals only need these three corners.
///
/// # Errors
///
/// Fails if a corner has no vertex.
pub fn face_corners(topology: &Topology) -> Result<Vec<[VertexId; 3]>> {
    topology
        .face_ids()
        .map(|f| {
            Ok([
                topology.face_vertex(f, 0)?,
                topology.face_vertex(f, 1)?,
                topology.face_vertex(f, 2)?,
            ])
        })
        .collect()
}

/// Flat normal of the triangle `(v0, v1, v2)`.
///
/// Uses `(v2 - v1) x (v0 - v1)`: corners that are clockwise when viewed from
/// outside in a left-handed frame give the outward normal. Degenerate
/// triangles give the zero vector.
#[inline]
pub fn triangle_normal(v0: &Point3<f64>, v1: &Point3<f64>, v2: &Point3<f64>) -> Vector3<f64> {
    normalized_or_zero((v2 - v1).cross(&(v0 - v1)))
}

/// Flat normal of a face, evaluated at the given vertex positions.
#[inline]
pub fn face_normal(corners: &[VertexId; 3], positions: &[Point3<f64>]) -> Vector3<f64> {
    let [a, b, c] = corners.map(|v| &positions[v.index()]);
    triangle_normal(a, b, c)
}

/// Compute one blended normal per rendering vertex.
///
/// `positions` is indexed by vertex and must hold one entry per vertex;
/// [`AutoMesh::normals_with`](crate::mesh::AutoMesh::normals_with) checks
/// this for outside callers. `face_corners` comes from [`face_corners`]. When
/// `parallel` is set, vertices are evaluated with rayon. The output is
/// identical either way.
pub(crate) fn compute_normals(
    topology: &Topology,
    face_corners: &[[VertexId; 3]],
    positions: &[Point3<f64>],
    parallel: bool,
) -> Vec<Vector3<f64>> {
    debug_assert_eq!(positions.len(), topology.num_vertices());

    let face_normals: Vec<Vector3<f64>> = face_corners
        .iter()
        .map(|corners| face_normal(corners, positions))
        .collect();

    let point_normals: Vec<Vector3<f64>> = topology
        .point_ids()
        .map(|p| smooth_normal(topology, p, &face_normals))
        .collect();

    let blend = |i: usize| {
        vertex_normal(topology, VertexId::new(i), &face_normals, &point_normals)
    };

    if parallel {
        (0..topology.num_vertices()).into_par_iter().map(blend).collect()
    } else {
        (0..topology.num_vertices()).map(blend).collect()
    }
}

/// Mean of the flat normals of every face around a point.
///
/// This ignores splitting and serves as the fully smooth reference.
pub fn smooth_normal(topology: &Topology, point: PointId, face_normals: &[Vector3<f64>]) -> Vector3<f64> {
    let faces = topology.point(point).faces();
    if faces.is_empty() {
        return Vector3::zeros();
    }

    let sum: Vector3<f64> = faces.iter().map(|f| face_normals[f.index()]).sum();
    sum / faces.len() as f64
}

fn vertex_normal(
    topology: &Topology,
    vertex: VertexId,
    face_normals: &[Vector3<f64>],
    point_normals: &[Vector3<f64>],
) -> Vector3<f64> {
    let v = topology.vertex(vertex);
    let point_normal = point_normals[v.point().index()];

    let mut sum = Vector3::zeros();
    let mut count = 0usize;

    for &face in v.faces() {
        let face_normal = face_normals[face.index()];

        for fe in edges_at(topology, face, v.point()) {
            let s = topology.edge(fe).softness();
            sum += face_normal * (1.0 - s) + point_normal * s;
            count += 1;
        }
    }

    if count == 0 {
        return Vector3::zeros();
    }
    sum / count as f64
}

/// Mesh edges of `face` that touch `point`.
fn edges_at(
    topology: &Topology,
    face: FaceId,
    point: PointId,
) -> impl Iterator<Item = EdgeId> + '_ {
    topology
        .face(face)
        .edges()
        .iter()
        .filter(move |fe| fe.points.contains(point))
        .map(|fe| fe.edge)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_normal_convention() {
        let v0 = Point3::new(1.0, 0.0, 0.0);
        let v1 = Point3::new(0.0, 1.0, 0.0);
        let v2 = Point3::new(-1.0, -1.0, 0.0);

        let n = triangle_normal(&v0, &v1, &v2);
        assert!((n - Vector3::z()).norm() < 1e-12);

        let flipped = triangle_normal(&v2, &v1, &v0);
        assert!((flipped + Vector3::z()).norm() < 1e-12);
    }

    #[test]
    fn test_degenerate_triangle_normal() {
        let p = Point3::new(1.0, 1.0, 1.0);
        let n = triangle_normal(&p, &p, &Point3::new(2.0, 2.0, 2.0));
        assert_eq!(n, Vector3::zeros());
    }
}
