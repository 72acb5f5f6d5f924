//! Progress reporting for mesh construction.
//!
//! Building a mesh runs several phases in sequence. A [`Progress`] callback
//! receives one update as each phase starts, plus a final update once the
//! mesh is complete. The per-point phases (face discovery and vertex
//! splitting) also report after each point, scaled into their phase.
//!
//! # Example
//!
//! ```
//! use automesh::algo::Progress;
//! use automesh::mesh::{AutoMesh, AutoMeshOptions};
//! use automesh::shapes;
//!
//! let progress = Progress::new(|current, total, message| {
//!     println!("[{}/{}] {}", current, total, message);
//! });
//!
//! let cube = shapes::cube();
//! let mesh = AutoMesh::build_with_progress(
//!     &cube.positions,
//!     &cube.edges,
//!     &AutoMeshOptions::default(),
//!     &progress,
//! )
//! .unwrap();
//! assert_eq!(mesh.indices().len(), 36);
//! ```

/// A progress callback that receives updates during long-running operations.
///
/// The callback receives:
/// - `current`: Current step (0-based)
/// - `total`: Total number of steps
/// - `message`: Description of the current operation
pub struct Progress {
    callback: Box<dyn Fn(usize, usize, &str) + Send + Sync>,
}

impl Progress {
    /// Create a new progress reporter with the given callback.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(usize, usize, &str) + Send + Sync + 'static,
    {
        Self {
            callback: Box::new(callback),
        }
    }

    /// Report progress.
    #[inline]
    pub fn report(&self, current: usize, total: usize, message: &str) {
        (self.callback)(current, total, message);
    }

    /// Report progress within a sub-range.
    ///
    /// Maps progress from `[0, sub_total]` to `[range_current, range_current + 1]`
    /// within a total of `range_total` steps. This enables hierarchical progress
    /// where sub-operations report their progress within an allocated slice.
    ///
    /// # Example
    ///
    /// ```ignore
    /// // Five phases. Phase 2 splits points, reported point by point:
    /// progress.report_sub(index + 1, num_points, 2, 5, "Splitting vertices");
    /// ```
    #[inline]
    pub fn report_sub(
        &self,
        sub_current: usize,
        sub_total: usize,
        range_current: usize,
        range_total: usize,
        message: &str,
    ) {
        if sub_total == 0 || range_total == 0 {
            return;
        }
        // Map sub-progress to the range [range_current, range_current + 1)
        // Using fixed-point math to avoid floating point: multiply by 1000 for precision
        let sub_fraction = (sub_current * 1000) / sub_total;
        let effective = range_current * 1000 + sub_fraction;
        let total_scaled = range_total * 1000;
        (self.callback)(effective, total_scaled, message);
    }

    /// Create a no-op progress reporter that discards all updates.
    pub fn none() -> Self {
        Self::new(|_, _, _| {})
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::none()
    }
}

impl std::fmt::Debug for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Progress").finish_non_exhaustive()
    }
}
