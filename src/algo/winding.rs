//! Winding resolution.
//!
//! Discovery leaves each face with whatever edge order the search happened to
//! walk. This pass picks an orientation for one seed face and floods it across
//! shared edges so that all reachable faces agree.
//!
//! # Seed orientation
//!
//! The seed is a face at the point farthest from the origin, where the outward
//! direction is least ambiguous. The vector from the mesh centroid to the seed
//! face's centroid serves as a pseudo-normal. The seed is kept as discovered
//! if, seen around that pseudo-normal, its first corner turns toward its
//! second in the same sense that [`face_normal`](super::normals::face_normal)
//! treats as outward. Otherwise it is reversed. Strongly concave meshes can fool
//! this heuristic; callers can invert the decision with
//! [`AutoMeshOptions::with_flip_winding`](crate::mesh::AutoMeshOptions::with_flip_winding).
//!
//! # Propagation
//!
//! Two faces sharing an edge are consistently wound exactly when they traverse
//! that edge in opposite directions. A neighbor that traverses it in the same
//! direction is reversed. Every face is resolved at most once. Faces outside
//! the seed's connected component are left as discovered.

use std::collections::VecDeque;

use nalgebra::Vector3;

use crate::error::{MeshError, Result};
use crate::mesh::{FaceId, PointId, Topology};

/// Make the winding of every face reachable from the seed consistent.
///
/// Returns the number of faces resolved.
///
/// # Errors
///
/// Fails if no faces were discovered, if the seed point has no faces, or if a
/// neighboring face is missing the edge it shares with its neighbor.
pub fn resolve_winding(topology: &mut Topology, flip: bool) -> Result<usize> {
    if topology.num_faces() == 0 {
        return Err(MeshError::NoFaces);
    }

    let seed = choose_seed_face(topology)?;
    let mut reverse = !has_expected_winding(topology, seed);
    if flip {
        reverse = !reverse;
    }
    log::debug!("winding seed {:?} (reverse: {})", seed, reverse);

    topology.faces[seed.index()].set_winding(reverse);
    let resolved = propagate(topology, seed)?;

    let unresolved = topology.unresolved_faces().count();
    if unresolved > 0 {
        log::warn!(
            "{} faces are not connected to the winding seed and keep their discovered order",
            unresolved
        );
    }

    Ok(resolved)
}

/// The first face of the point farthest from the origin.
pub(crate) fn choose_seed_face(topology: &Topology) -> Result<FaceId> {
    let mut seed = PointId::new(0);
    let mut max = topology.position(seed).coords.norm_squared();

    for p in topology.point_ids().skip(1) {
        let mag = topology.position(p).coords.norm_squared();
        if mag > max {
            seed = p;
            max = mag;
        }
    }

    topology
        .point(seed)
        .faces()
        .first()
        .copied()
        .ok_or(MeshError::NoSeedFace {
            point: seed.index(),
        })
}

/// Whether the face's current edge order already faces away from the mesh
/// centroid.
pub(crate) fn has_expected_winding(topology: &Topology, face: FaceId) -> bool {
    let face_center = topology.face_centroid(face);
    let pseudo_normal = normalized_or_zero(face_center - topology.centroid());

    let mut corners = topology.face(face).points();
    let (Some(c0), Some(c1)) = (corners.next(), corners.next()) else {
        return true;
    };

    let a = *topology.position(c0) - face_center;
    let b = *topology.position(c1) - face_center;

    // face_normal uses (v2 - v1) x (v0 - v1); relative to the centre that is
    // the same turn as a x b.
    a.cross(&b).dot(&pseudo_normal) > 0.0
}

/// Flood the seed's winding to every reachable face. Returns the number of
/// faces resolved, including the seed.
fn propagate(topology: &mut Topology, seed: FaceId) -> Result<usize> {
    let mut queue = VecDeque::from([seed]);
    let mut resolved = 1;

    while let Some(face) = queue.pop_front() {
        let edges = topology.face(face).edges().to_vec();

        for edge in edges {
            let Some(adjacent) = topology.edge(edge.edge).next_face(face) else {
                continue;
            };
            if topology.face(adjacent).is_winding_set() {
                continue;
            }

            // The shared edge must run the other way in the neighbor.
            let like = topology.like_edge(adjacent, edge.points)?;
            let reverse = like.points.is_exact(edge.points);

            if topology.faces[adjacent.index()].set_winding(reverse) {
                resolved += 1;
                queue.push_back(adjacent);
            }
        }
    }

    Ok(resolved)
}

pub(crate) fn normalized_or_zero(v: Vector3<f64>) -> Vector3<f64> {
    v.try_normalize(f64::EPSILON).unwrap_or_else(Vector3::zeros)
}
