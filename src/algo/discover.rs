//! Face discovery.
//!
//! Faces are the minimal closed loops of three or four edges in the input
//! graph. Starting from every point in turn, a depth-bounded search walks
//! outward along edges that still have room for another face, keeping the walk
//! as a path of directed point pairs. Reaching the start point again with a
//! path of exactly the target length yields a candidate face.
//!
//! # Search order
//!
//! For each start point the triangle pass (target length 3) runs before the
//! quad pass (target length 4). A quad whose point set covers an
//! already accepted triangle is therefore rejected as redundant. This matters
//! for quads split along a diagonal, where the two triangles are the faces.
//!
//! # Early exit
//!
//! The search is not exhaustive. Arriving back at the start unwinds the path to
//! its first edge, and the search resumes with the next edge leaving the start
//! point. At most one loop is accepted per (start point, first edge) branch.
//! Exhaustive enumeration would report extra, overlapping loops.

use std::collections::HashSet;

use super::progress::Progress;
use crate::error::{MeshError, Result};
use crate::mesh::{Face, FaceEdge, FaceId, Pair, PointId, Topology};

/// Triangles are searched before quads.
const LOOP_LENGTHS: [usize; 2] = [3, 4];

/// Find every triangle and quad face in the edge graph.
///
/// Faces are appended to the topology in discovery order and attached to the
/// points and mesh edges they use. Returns the number of faces found.
///
/// # Errors
///
/// Fails if a loop step has no mesh edge, an edge would receive a third face,
/// or an accepted loop turns out to be contained in an earlier one.
pub fn discover_faces(topology: &mut Topology) -> Result<usize> {
    discover_faces_internal(topology, None, 0, 1)
}

/// Find faces, reporting once per start point within build step `step` of
/// `total_steps`.
pub fn discover_faces_with_progress(
    topology: &mut Topology,
    progress: &Progress,
    step: usize,
    total_steps: usize,
) -> Result<usize> {
    discover_faces_internal(topology, Some(progress), step, total_steps)
}

fn discover_faces_internal(
    topology: &mut Topology,
    progress: Option<&Progress>,
    step: usize,
    total_steps: usize,
) -> Result<usize> {
    let num_points = topology.num_points();
    let mut search = LoopSearch {
        topology,
        loops: Vec::new(),
        path: Vec::with_capacity(LOOP_LENGTHS[1]),
    };

    for start in 0..num_points {
        let point = PointId::new(start);
        for max in LOOP_LENGTHS {
            search.path.clear();
            search.walk(point, point, max)?;
        }

        if let Some(p) = progress {
            p.report_sub(start + 1, num_points, step, total_steps, "Discovering faces");
        }
    }

    let found = search.topology.num_faces();
    log::debug!(
        "discovered {} faces from {} points and {} edges",
        found,
        search.topology.num_points(),
        search.topology.num_edges()
    );
    Ok(found)
}

struct LoopSearch<'a> {
    topology: &'a mut Topology,
    /// Point sets of accepted loops.
    loops: Vec<HashSet<PointId>>,
    /// Directed steps taken so far, used as a stack.
    path: Vec<Pair<PointId>>,
}

impl LoopSearch<'_> {
    /// Extend the path from `p0`. Returns `true` when the caller should unwind.
    fn walk(&mut self, start: PointId, p0: PointId, max: usize) -> Result<bool> {
        let num_edges = self.topology.point(p0).edges().len();

        for i in 0..num_edges {
            let edge_id = self.topology.point(p0).edges()[i];
            let edge = self.topology.edge(edge_id);

            // Faces attached during this search fill edges up as we go.
            if edge.is_complete() || self.path.iter().any(|step| step.is_like(edge.points())) {
                continue;
            }

            let p1 = edge.next(p0);
            self.path.push(Pair::new(p0, p1));

            let unwind = if p1 == start {
                if self.path.len() == max {
                    self.try_add_face()?;
                }
                true
            } else if self.path.len() < max {
                self.walk(start, p1, max)? && self.path.len() > 1
            } else {
                false
            };

            self.path.pop();

            if unwind {
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Accept the current path as a face unless an earlier loop covers it.
    fn try_add_face(&mut self) -> Result<()> {
        let candidate: HashSet<PointId> = self.path.iter().map(|step| step.p0).collect();
        let face_id = FaceId::new(self.topology.num_faces());

        for accepted in &self.loops {
            // Non-strict: also rejects the same loop found from another start.
            if accepted.is_subset(&candidate) {
                log::trace!("rejected loop {:?}: covers an earlier face", self.path);
                return Ok(());
            }
            if accepted.is_superset(&candidate) {
                return Err(MeshError::LoopInvariant {
                    face: face_id.index(),
                });
            }
        }

        let mut face_edges = Vec::with_capacity(self.path.len());
        for step in &self.path {
            let edge_id = self
                .topology
                .edge_between(step.p0, step.p1)
                .ok_or(MeshError::MissingEdge {
                    p0: step.p0.index(),
                    p1: step.p1.index(),
                })?;

            self.topology.points[step.p0.index()].add_face(face_id);
            self.topology.edges[edge_id.index()].add_face(face_id)?;
            face_edges.push(FaceEdge::new(step.p0, step.p1, edge_id));
        }

        log::trace!("accepted loop {:?} as {:?}", self.path, face_id);
        self.loops.push(candidate);
        self.topology.faces.push(Face::new(face_edges));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::Edge;
    use crate::shapes;
    use nalgebra::Point3;

    fn discover(positions: &[Point3<f64>], edges: &[Edge]) -> Topology {
        let mut topology = Topology::from_input(positions, edges).unwrap();
        discover_faces(&mut topology).unwrap();
        topology
    }

    fn face_point_sets(topology: &Topology) -> Vec<Vec<usize>> {
        topology
            .face_ids()
            .map(|f| {
                let mut pts: Vec<usize> = topology.face(f).points().map(|p| p.index()).collect();
                pts.sort_unstable();
                pts
            })
            .collect()
    }

    #[test]
    fn test_cube_has_six_quads() {
        let cube = shapes::cube();
        let topology = discover(&cube.positions, &cube.edges);

        assert_eq!(topology.num_faces(), 6);
        for f in topology.face_ids() {
            assert_eq!(topology.face(f).len(), 4);
        }
        for e in topology.edge_ids() {
            assert!(topology.edge(e).is_complete());
        }
    }

    #[test]
    fn test_faces_are_closed_cycles() {
        let cube = shapes::cube();
        let topology = discover(&cube.positions, &cube.edges);

        for f in topology.face_ids() {
            let edges = topology.face(f).edges();
            let n = edges.len();
            for i in 0..n {
                assert_eq!(edges[i].p1(), edges[(i + 1) % n].p0());
            }
        }
    }

    #[test]
    fn test_tetrahedron_has_four_triangles() {
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        ];
        let edges = vec![
            Edge::hard(0, 1),
            Edge::hard(0, 2),
            Edge::hard(0, 3),
            Edge::hard(1, 2),
            Edge::hard(1, 3),
            Edge::hard(2, 3),
        ];
        let topology = discover(&positions, &edges);

        let mut sets = face_point_sets(&topology);
        sets.sort();
        assert_eq!(
            sets,
            vec![vec![0, 1, 2], vec![0, 1, 3], vec![0, 2, 3], vec![1, 2, 3]]
        );
    }

    #[test]
    fn test_split_quad_prefers_triangles() {
        // A square with one diagonal: two triangles, never the outer quad.
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let edges = vec![
            Edge::hard(0, 1),
            Edge::hard(1, 2),
            Edge::hard(2, 3),
            Edge::hard(3, 0),
            Edge::soft(0, 2),
        ];
        let topology = discover(&positions, &edges);

        let mut sets = face_point_sets(&topology);
        sets.sort();
        assert_eq!(sets, vec![vec![0, 1, 2], vec![0, 2, 3]]);
    }

    #[test]
    fn test_open_quad_is_found_once() {
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let edges = vec![
            Edge::hard(0, 1),
            Edge::hard(1, 2),
            Edge::hard(2, 3),
            Edge::hard(3, 0),
        ];
        let topology = discover(&positions, &edges);

        assert_eq!(topology.num_faces(), 1);
        assert_eq!(topology.boundary_edges().count(), 4);
    }

    #[test]
    fn test_long_cycle_is_not_a_face() {
        let positions: Vec<Point3<f64>> = (0..5)
            .map(|i| {
                let a = i as f64 * std::f64::consts::TAU / 5.0;
                Point3::new(a.cos(), a.sin(), 0.0)
            })
            .collect();
        let edges: Vec<Edge> = (0..5).map(|i| Edge::hard(i, (i + 1) % 5)).collect();
        let topology = discover(&positions, &edges);

        assert_eq!(topology.num_faces(), 0);
    }

    #[test]
    fn test_progress_reports_each_start_point() {
        use std::sync::{Arc, Mutex};

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let progress = Progress::new(move |current, total, _| {
            sink.lock().unwrap().push((current, total));
        });

        let pyramid = shapes::pyramid(0.0);
        let mut topology = Topology::from_input(&pyramid.positions, &pyramid.edges).unwrap();
        let found = discover_faces_with_progress(&mut topology, &progress, 1, 4).unwrap();

        assert_eq!(found, 5);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![(1200, 4000), (1400, 4000), (1600, 4000), (1800, 4000), (2000, 4000)]
        );
    }

    #[test]
    fn test_faces_registered_on_points() {
        let cube = shapes::cube();
        let topology = discover(&cube.positions, &cube.edges);

        for p in topology.point_ids() {
            assert_eq!(topology.point(p).faces().len(), 3);
        }
    }
}
