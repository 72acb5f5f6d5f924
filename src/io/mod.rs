//! Mesh file export.
//!
//! This module provides functions for saving rendering meshes in common
//! interchange formats.
//!
//! # Supported Formats
//!
//! | Format | Extension | Normals | Notes |
//! |--------|-----------|---------|-------|
//! | Wavefront OBJ | `.obj` | per vertex | Most common format |
//! | PLY | `.ply` | per vertex | Stanford polygon format, ASCII |
//! | STL | `.stl` | per face | Binary |
//!
//! # Usage
//!
//! The easiest way to save is using the automatic format detection:
//!
//! ```no_run
//! use automesh::io::save;
//! use automesh::shapes;
//!
//! let mesh = shapes::cube().build().unwrap();
//! save(&mesh.render_mesh(), "cube.obj").unwrap();
//! ```
//!
//! You can also use format-specific functions:
//!
//! ```no_run
//! use automesh::io::ply;
//! use automesh::shapes;
//!
//! let mesh = shapes::rock().build().unwrap();
//! ply::save(&mesh.render_mesh(), "rock.ply").unwrap();
//! ```

pub mod obj;
pub mod ply;
pub mod stl;

use std::path::Path;

use crate::error::{MeshError, Result};
use crate::mesh::RenderMesh;

/// Supported mesh file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Wavefront OBJ format.
    Obj,
    /// STL (stereolithography) format.
    Stl,
    /// PLY (Stanford polygon) format.
    Ply,
}

impl Format {
    /// Detect format from file extension.
    pub fn from_extension(ext: &str) -> Option<Format> {
        match ext.to_lowercase().as_str() {
            "obj" => Some(Format::Obj),
            "stl" => Some(Format::Stl),
            "ply" => Some(Format::Ply),
            _ => None,
        }
    }

    /// Detect format from file path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Format> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Format::from_extension)
    }
}

/// Save a mesh to a file with automatic format detection.
///
/// The format is determined by the file extension.
///
/// # Errors
///
/// Returns [`MeshError::UnsupportedFormat`] for unknown extensions, or an I/O
/// error if the file cannot be written.
pub fn save<P: AsRef<Path>>(mesh: &RenderMesh, path: P) -> Result<()> {
    let path = path.as_ref();
    let format = Format::from_path(path).ok_or_else(|| MeshError::UnsupportedFormat {
        extension: path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("(none)")
            .to_string(),
    })?;

    log::debug!("saving {} triangles to {}", mesh.triangle_count(), path.display());

    match format {
        Format::Obj => obj::save(mesh, path),
        Format::Stl => stl::save(mesh, path),
        Format::Ply => ply::save(mesh, path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection() {
        assert_eq!(Format::from_path("a/b/mesh.OBJ"), Some(Format::Obj));
        assert_eq!(Format::from_path("mesh.ply"), Some(Format::Ply));
        assert_eq!(Format::from_path("mesh.stl"), Some(Format::Stl));
        assert_eq!(Format::from_path("mesh.glb"), None);
        assert_eq!(Format::from_path("mesh"), None);
    }

    #[test]
    fn test_unsupported_extension() {
        let mesh = crate::shapes::cube().build().unwrap().render_mesh();
        let result = save(&mesh, "mesh.fbx");
        assert!(matches!(
            result,
            Err(MeshError::UnsupportedFormat { extension }) if extension == "fbx"
        ));
    }
}
