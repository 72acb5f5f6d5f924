//! Per-point deformation of rendering vertices.
//!
//! Splitting duplicates a point into several vertices. A morph must move all of
//! them together or the crease would tear open, so deformation functions are
//! evaluated per point and the result is broadcast to the point's vertices.

use nalgebra::Point3;

use crate::mesh::Topology;

/// Vertex positions taken straight from the points.
pub fn vertex_positions(topology: &Topology) -> Vec<Point3<f64>> {
    topology
        .vertex_ids()
        .map(|v| *topology.position(topology.vertex(v).point()))
        .collect()
}

/// Evaluate `f` once per point and write the result to every vertex of that
/// point.
///
/// `f` receives the point's original position and index. Points without
/// vertices (those not on any face) are still visited, so `f` sees every point
/// in order.
pub fn morph_positions<F>(topology: &Topology, mut f: F) -> Vec<Point3<f64>>
where
    F: FnMut(&Point3<f64>, usize) -> Point3<f64>,
{
    let mut positions = vec![Point3::origin(); topology.num_vertices()];

    for p in topology.point_ids() {
        let moved = f(topology.position(p), p.index());
        for &v in topology.point(p).vertices() {
            positions[v.index()] = moved;
        }
    }

    positions
}
