//! Mesh construction from point/edge graphs.
//!
//! [`AutoMesh`] runs the build stages from [`crate::algo`] in order and keeps
//! the frozen result:
//!
//! 1. Validate the input and build the point and edge tables
//! 2. Discover triangle and quad faces
//! 3. Resolve a consistent winding
//! 4. Split points into rendering vertices at hard edges
//! 5. Emit triangle indices
//! 6. Blend normals
//!
//! Construction either succeeds completely or returns an error. A partially
//! built mesh is never handed out.

use nalgebra::{Point3, Vector3};

use super::edge::Edge;
use super::index::VertexId;
use super::topology::Topology;
use crate::algo::discover::discover_faces_with_progress;
use crate::algo::morph::{morph_positions, vertex_positions};
use crate::algo::normals::{compute_normals, face_corners};
use crate::algo::split::{split_vertices_with_progress, DEFAULT_SOFT_THRESHOLD};
use crate::algo::triangulate::triangulate;
use crate::algo::winding::resolve_winding;
use crate::algo::Progress;
use crate::error::{MeshError, Result};

/// Phase names reported through [`Progress`].
const PHASES: [&str; 5] = [
    "Discovering faces",
    "Resolving winding",
    "Splitting vertices",
    "Triangulating",
    "Computing normals",
];

/// Options for building an [`AutoMesh`].
#[derive(Debug, Clone)]
pub struct AutoMeshOptions {
    /// Invert the outward-facing decision made for the winding seed.
    ///
    /// The seed heuristic assumes a roughly convex shape. Set this when the
    /// result comes out inside-out.
    pub flip_winding: bool,

    /// Softness at or above which an edge joins its faces into one vertex.
    pub soft_threshold: f64,

    /// Whether to evaluate vertex normals in parallel (default: false).
    pub parallel: bool,
}

impl Default for AutoMeshOptions {
    fn default() -> Self {
        Self {
            flip_winding: false,
            soft_threshold: DEFAULT_SOFT_THRESHOLD,
            parallel: false,
        }
    }
}

impl AutoMeshOptions {
    /// Set whether to invert the winding decision.
    pub fn with_flip_winding(mut self, flip: bool) -> Self {
        self.flip_winding = flip;
        self
    }

    /// Create options with the specified soft threshold.
    pub fn with_soft_threshold(mut self, threshold: f64) -> Self {
        self.soft_threshold = threshold;
        self
    }

    /// Set whether to use parallel execution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Create options for single-threaded execution.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    fn validate(&self) -> Result<()> {
        if !self.soft_threshold.is_finite() || !(0.0..=1.0).contains(&self.soft_threshold) {
            return Err(MeshError::invalid_param(
                "soft_threshold",
                self.soft_threshold,
                "must be a finite value in [0, 1]",
            ));
        }
        Ok(())
    }
}

/// Flat vertex, normal and index buffers ready for rendering.
///
/// `positions` and `normals` are parallel arrays indexed by vertex. `indices`
/// holds three vertex indices per triangle.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderMesh {
    /// Vertex positions.
    pub positions: Vec<Point3<f64>>,
    /// Vertex normals, one per position.
    pub normals: Vec<Vector3<f64>>,
    /// Triangle vertex indices.
    pub indices: Vec<u32>,
}

impl RenderMesh {
    /// Get the number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterate over triangles as vertex index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|t| [t[0] as usize, t[1] as usize, t[2] as usize])
    }

    /// Positions as a flat `x, y, z` array for GPU upload.
    pub fn flat_positions(&self) -> Vec<f32> {
        self.positions
            .iter()
            .flat_map(|p| [p.x as f32, p.y as f32, p.z as f32])
            .collect()
    }

    /// Normals as a flat `x, y, z` array for GPU upload.
    pub fn flat_normals(&self) -> Vec<f32> {
        self.normals
            .iter()
            .flat_map(|n| [n.x as f32, n.y as f32, n.z as f32])
            .collect()
    }
}

/// A renderable mesh reconstructed from points and edges.
///
/// Immutable once built. Every query takes `&self`, so a mesh can be shared
/// across threads and morphed concurrently.
///
/// # Example
///
/// ```
/// use automesh::mesh::{AutoMesh, AutoMeshOptions, Edge};
/// use nalgebra::Point3;
///
/// // A single triangle.
/// let points = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ];
/// let edges = vec![Edge::hard(0, 1), Edge::hard(1, 2), Edge::hard(2, 0)];
///
/// let mesh = AutoMesh::build(&points, &edges, &AutoMeshOptions::default()).unwrap();
/// assert_eq!(mesh.indices().len(), 3);
/// assert_eq!(mesh.positions().len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct AutoMesh {
    topology: Topology,
    face_corners: Vec<[VertexId; 3]>,
    positions: Vec<Point3<f64>>,
    normals: Vec<Vector3<f64>>,
    indices: Vec<u32>,
    parallel: bool,
}

impl AutoMesh {
    /// Build a mesh from points and edges.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is invalid (see
    /// [`Topology::from_input`]), if no faces can be found, or if the edge
    /// graph cannot form a consistent mesh.
    pub fn build(points: &[Point3<f64>], edges: &[Edge], options: &AutoMeshOptions) -> Result<Self> {
        Self::build_with_progress(points, edges, options, &Progress::none())
    }

    /// Build a mesh, reporting each phase through `progress`.
    ///
    /// Every phase reports as it starts. Face discovery and vertex splitting
    /// also report per point, scaled into their phase with
    /// [`Progress::report_sub`].
    pub fn build_with_progress(
        points: &[Point3<f64>],
        edges: &[Edge],
        options: &AutoMeshOptions,
        progress: &Progress,
    ) -> Result<Self> {
        options.validate()?;
        let total = PHASES.len();

        let mut topology = Topology::from_input(points, edges)?;

        progress.report(0, total, PHASES[0]);
        discover_faces_with_progress(&mut topology, progress, 0, total)?;

        progress.report(1, total, PHASES[1]);
        resolve_winding(&mut topology, options.flip_winding)?;

        progress.report(2, total, PHASES[2]);
        split_vertices_with_progress(&mut topology, options.soft_threshold, progress, 2, total);

        progress.report(3, total, PHASES[3]);
        let indices = triangulate(&topology)?;
        let face_corners = face_corners(&topology)?;

        progress.report(4, total, PHASES[4]);
        let positions = vertex_positions(&topology);
        let normals = compute_normals(&topology, &face_corners, &positions, options.parallel);

        progress.report(total, total, "Done");
        log::debug!(
            "built mesh: {} points, {} faces, {} vertices, {} triangles",
            topology.num_points(),
            topology.num_faces(),
            topology.num_vertices(),
            indices.len() / 3
        );

        Ok(Self {
            topology,
            face_corners,
            positions,
            normals,
            indices,
            parallel: options.parallel,
        })
    }

    // ==================== Accessors ====================

    /// Vertex positions.
    #[inline]
    pub fn positions(&self) -> &[Point3<f64>] {
        &self.positions
    }

    /// Vertex normals, one per position.
    #[inline]
    pub fn normals(&self) -> &[Vector3<f64>] {
        &self.normals
    }

    /// Triangle vertex indices.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Get the number of rendering vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// The underlying point/edge/face/vertex graph.
    #[inline]
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Copy the buffers into a standalone [`RenderMesh`].
    pub fn render_mesh(&self) -> RenderMesh {
        RenderMesh {
            positions: self.positions.clone(),
            normals: self.normals.clone(),
            indices: self.indices.clone(),
        }
    }

    // ==================== Deformation ====================

    /// Deform the mesh without touching its topology.
    ///
    /// `f` is called once per point with the point's original position and
    /// index. Its result is applied to every vertex split from that point, and
    /// normals are recomputed for the new pose. The indices are unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use automesh::shapes;
    /// use nalgebra::Vector3;
    ///
    /// let mesh = shapes::cube().build().unwrap();
    /// let lifted = mesh.morph(|p, _| p + Vector3::new(0.0, 1.0, 0.0));
    /// assert_eq!(lifted.indices, mesh.indices());
    /// ```
    pub fn morph<F>(&self, f: F) -> RenderMesh
    where
        F: FnMut(&Point3<f64>, usize) -> Point3<f64>,
    {
        let positions = morph_positions(&self.topology, f);
        let normals = compute_normals(&self.topology, &self.face_corners, &positions, self.parallel);
        RenderMesh {
            positions,
            normals,
            indices: self.indices.clone(),
        }
    }

    /// Evaluate normals for arbitrary vertex positions.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::PositionCountMismatch`] unless there is exactly one
    /// position per vertex.
    pub fn normals_with(&self, positions: &[Point3<f64>]) -> Result<Vec<Vector3<f64>>> {
        if positions.len() != self.num_vertices() {
            return Err(MeshError::PositionCountMismatch {
                expected: self.num_vertices(),
                actual: positions.len(),
            });
        }
        Ok(compute_normals(
            &self.topology,
            &self.face_corners,
            positions,
            self.parallel,
        ))
    }
}
