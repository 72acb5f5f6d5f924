//! Point-to-vertex splitting.
//!
//! A point becomes one rendering vertex per group of its faces that meet
//! across fully soft edges. Faces in one group share a vertex and a blended
//! normal. Faces separated by a hard or partially soft edge end up in different
//! vertices, which leaves a visible crease.
//!
//! Grouping is greedy. Pending faces are attached to any existing vertex they
//! reach across a fully soft edge, and the scan repeats until nothing changes.
//! Only then does the first remaining face seed a new vertex. Because each
//! group is grown to a fixpoint before the next one starts, membership is the
//! transitive closure of soft adjacency. Scan order only decides which face
//! seeds a group.

use super::progress::Progress;
use crate::mesh::{FaceId, PointId, Topology, VertexId};

/// Softness at or above which an edge joins faces into one vertex.
///
/// Slightly below 1.0 so that values produced by arithmetic still count.
pub const DEFAULT_SOFT_THRESHOLD: f64 = 0.99999;

/// Split every point into rendering vertices.
///
/// Vertices are numbered in creation order: all vertices of point 0 first,
/// then point 1, and so on. Returns the number of vertices created.
pub fn split_vertices(topology: &mut Topology, soft_threshold: f64) -> usize {
    split_vertices_internal(topology, soft_threshold, None, 0, 1)
}

/// Split every point, reporting once per point within build step `step` of
/// `total_steps`.
pub fn split_vertices_with_progress(
    topology: &mut Topology,
    soft_threshold: f64,
    progress: &Progress,
    step: usize,
    total_steps: usize,
) -> usize {
    split_vertices_internal(topology, soft_threshold, Some(progress), step, total_steps)
}

fn split_vertices_internal(
    topology: &mut Topology,
    soft_threshold: f64,
    progress: Option<&Progress>,
    step: usize,
    total_steps: usize,
) -> usize {
    let num_points = topology.num_points();
    for index in 0..num_points {
        let point = PointId::new(index);
        let mut pending: Vec<FaceId> = topology.point(point).faces().to_vec();

        while !pending.is_empty() {
            let before = pending.len();
            pending.retain(|&face| match soft_neighbor_vertex(topology, point, face, soft_threshold) {
                Some(vertex) => {
                    topology.vertices[vertex.index()].add_face(face);
                    false
                }
                None => true,
            });

            if pending.len() == before {
                let seed = pending.remove(0);
                topology.add_vertex(point, seed);
            }
        }

        if let Some(p) = progress {
            p.report_sub(index + 1, num_points, step, total_steps, "Splitting vertices");
        }
    }

    log::debug!(
        "split {} points into {} vertices",
        topology.num_points(),
        topology.num_vertices()
    );
    topology.num_vertices()
}

/// An existing vertex of `point` that `face` can join.
///
/// Looks at every fully soft edge shared by the point and the face. If the
/// face on the other side of such an edge already has a vertex at this point,
/// that vertex is returned. `None` covers both "no soft neighbor" and "soft
/// neighbor not yet assigned".
pub(crate) fn soft_neighbor_vertex(
    topology: &Topology,
    point: PointId,
    face: FaceId,
    soft_threshold: f64,
) -> Option<VertexId> {
    topology.face(face).edges().iter().find_map(|fe| {
        let edge = topology.edge(fe.edge);
        if edge.softness() < soft_threshold || !topology.point(point).has_edge(fe.edge) {
            return None;
        }
        topology.vertex_for(point, edge.next_face(face))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::discover::discover_faces;
    use crate::algo::winding::resolve_winding;
    use crate::mesh::Edge;
    use crate::shapes;
    use nalgebra::Point3;

    fn split(positions: &[Point3<f64>], edges: &[Edge]) -> Topology {
        let mut topology = Topology::from_input(positions, edges).unwrap();
        discover_faces(&mut topology).unwrap();
        resolve_winding(&mut topology, false).unwrap();
        split_vertices(&mut topology, DEFAULT_SOFT_THRESHOLD);
        topology
    }

    /// Two triangles folded along the shared edge 0-1.
    fn hinge(softness: f64) -> (Vec<Point3<f64>>, Vec<Edge>) {
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.5, 1.0, 0.0),
            Point3::new(0.5, 0.0, 1.0),
        ];
        let edges = vec![
            Edge::semi(0, 1, softness),
            Edge::hard(1, 2),
            Edge::hard(2, 0),
            Edge::hard(1, 3),
            Edge::hard(3, 0),
        ];
        (positions, edges)
    }

    /// Faces of each vertex at `point`, one sorted list per vertex.
    fn groups(topology: &Topology, point: usize) -> Vec<Vec<usize>> {
        let mut groups: Vec<Vec<usize>> = topology
            .point(PointId::new(point))
            .vertices()
            .iter()
            .map(|&v| {
                let mut faces: Vec<usize> =
                    topology.vertex(v).faces().iter().map(|f| f.index()).collect();
                faces.sort_unstable();
                faces
            })
            .collect();
        groups.sort();
        groups
    }

    #[test]
    fn test_hard_cube_has_one_vertex_per_corner_face() {
        let cube = shapes::cube();
        let topology = split(&cube.positions, &cube.edges);

        assert_eq!(topology.num_vertices(), 24);
        for p in topology.point_ids() {
            assert_eq!(topology.point(p).vertices().len(), 3);
        }
    }

    #[test]
    fn test_soft_cube_has_one_vertex_per_point() {
        let cube = shapes::cube();
        let soft: Vec<Edge> = cube.edges.iter().map(|e| Edge::soft(e.p0, e.p1)).collect();
        let topology = split(&cube.positions, &soft);

        assert_eq!(topology.num_vertices(), 8);
        for v in topology.vertex_ids() {
            assert_eq!(topology.vertex(v).faces().len(), 3);
        }
    }

    #[test]
    fn test_soft_edge_shares_vertex() {
        let (positions, edges) = hinge(1.0);
        let topology = split(&positions, &edges);

        assert_eq!(topology.num_faces(), 2);
        assert_eq!(groups(&topology, 0), vec![vec![0, 1]]);
        assert_eq!(groups(&topology, 1), vec![vec![0, 1]]);
        assert_eq!(topology.num_vertices(), 4);
    }

    #[test]
    fn test_hard_edge_splits_vertex() {
        let (positions, edges) = hinge(0.0);
        let topology = split(&positions, &edges);

        assert_eq!(groups(&topology, 0), vec![vec![0], vec![1]]);
        assert_eq!(groups(&topology, 1), vec![vec![0], vec![1]]);
        assert_eq!(topology.num_vertices(), 6);
    }

    #[test]
    fn test_partial_softness_still_splits() {
        let (positions, edges) = hinge(0.5);
        let topology = split(&positions, &edges);

        assert_eq!(topology.num_vertices(), 6);
    }

    #[test]
    fn test_every_face_has_exactly_one_vertex_per_corner() {
        let pyramid = shapes::pyramid(1.0);
        let topology = split(&pyramid.positions, &pyramid.edges);

        for p in topology.point_ids() {
            for &f in topology.point(p).faces() {
                let owners = topology
                    .point(p)
                    .vertices()
                    .iter()
                    .filter(|&&v| topology.vertex(v).is_shared_by(f))
                    .count();
                assert_eq!(owners, 1, "face {:?} at point {:?}", f, p);
            }
        }
    }

    #[test]
    fn test_progress_reports_each_point() {
        use std::sync::{Arc, Mutex};

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let progress = Progress::new(move |current, total, message| {
            sink.lock().unwrap().push((current, total, message.to_string()));
        });

        let cube = shapes::cube();
        let mut topology = Topology::from_input(&cube.positions, &cube.edges).unwrap();
        discover_faces(&mut topology).unwrap();
        resolve_winding(&mut topology, false).unwrap();
        let created =
            split_vertices_with_progress(&mut topology, DEFAULT_SOFT_THRESHOLD, &progress, 0, 1);

        assert_eq!(created, 24);
        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 8);
        assert_eq!(seen[0], (125, 1000, "Splitting vertices".to_string()));
        assert_eq!(seen[7].0, 1000);
    }

    #[test]
    fn test_soft_slants_merge_around_apex() {
        // Apex faces are all joined by soft slant edges.
        let pyramid = shapes::pyramid(1.0);
        let topology = split(&pyramid.positions, &pyramid.edges);

        assert_eq!(topology.point(PointId::new(4)).vertices().len(), 1);
        // Base corners: two soft-joined side faces plus the base across hard edges.
        for p in 0..4 {
            assert_eq!(topology.point(PointId::new(p)).vertices().len(), 2);
        }
    }
}
