//! Triangle index emission.
//!
//! Each face becomes one or two triangles over rendering vertices. Triangles
//! keep the face's corner order, so the resolved winding carries over. Quads
//! are split along the fixed 0-2 diagonal. No quality-driven diagonal choice is
//! made.

use crate::error::Result;
use crate::mesh::Topology;

/// Corner triples for a triangle face.
const TRIANGLE: [[usize; 3]; 1] = [[0, 1, 2]];

/// Corner triples for a quad face, fanned from corner 0.
const QUAD: [[usize; 3]; 2] = [[0, 1, 2], [2, 3, 0]];

/// Build the flat triangle index buffer.
///
/// The result holds three vertex indices per triangle, in face order.
///
/// # Errors
///
/// Fails if a face corner has no rendering vertex, which means splitting has
/// not run or is broken.
pub fn triangulate(topology: &Topology) -> Result<Vec<u32>> {
    let num_triangles: usize = topology
        .face_ids()
        .map(|f| if topology.face(f).is_quad() { 2 } else { 1 })
        .sum();
    let mut indices = Vec::with_capacity(num_triangles * 3);

    for face in topology.face_ids() {
        let corners: &[[usize; 3]] = if topology.face(face).is_quad() {
            &QUAD
        } else {
            &TRIANGLE
        };

        for triangle in corners {
            for &corner in triangle {
                indices.push(topology.face_vertex(face, corner)?.raw());
            }
        }
    }

    log::debug!("triangulated {} faces into {} triangles", topology.num_faces(), num_triangles);
    Ok(indices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::discover::discover_faces;
    use crate::algo::split::{split_vertices, DEFAULT_SOFT_THRESHOLD};
    use crate::algo::winding::resolve_winding;
    use crate::error::MeshError;
    use crate::mesh::{FaceId, Topology};
    use crate::shapes;

    fn prepared(shape: &shapes::ShapeInput) -> Topology {
        let mut topology = Topology::from_input(&shape.positions, &shape.edges).unwrap();
        discover_faces(&mut topology).unwrap();
        resolve_winding(&mut topology, shape.flip_winding).unwrap();
        topology
    }

    #[test]
    fn test_cube_indices() {
        let mut topology = prepared(&shapes::cube());
        split_vertices(&mut topology, DEFAULT_SOFT_THRESHOLD);

        let indices = triangulate(&topology).unwrap();
        assert_eq!(indices.len(), 36);
        assert!(indices.iter().all(|&i| (i as usize) < topology.num_vertices()));
    }

    #[test]
    fn test_quad_fan_order() {
        let mut topology = prepared(&shapes::cube());
        split_vertices(&mut topology, DEFAULT_SOFT_THRESHOLD);
        let indices = triangulate(&topology).unwrap();

        // First face is a quad: (0, 1, 2) then (2, 3, 0).
        let f = FaceId::new(0);
        let corner = |c| topology.face_vertex(f, c).unwrap().raw();
        assert_eq!(
            &indices[..6],
            &[corner(0), corner(1), corner(2), corner(2), corner(3), corner(0)]
        );
    }

    #[test]
    fn test_mixed_faces() {
        let mut topology = prepared(&shapes::pyramid(0.0));
        split_vertices(&mut topology, DEFAULT_SOFT_THRESHOLD);

        // One quad and four triangles.
        let indices = triangulate(&topology).unwrap();
        assert_eq!(indices.len(), (2 + 4) * 3);
    }

    #[test]
    fn test_missing_vertices_is_an_error() {
        let topology = prepared(&shapes::cube());
        let result = triangulate(&topology);
        assert!(matches!(result, Err(MeshError::MissingVertex { .. })));
    }
}
