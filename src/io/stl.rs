//! STL (stereolithography) export.
//!
//! STL has no shared vertices and a single normal per triangle, so soft
//! shading is lost. Facet normals are recomputed from the triangle corners.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::algo::normals::triangle_normal;
use crate::error::{MeshError, Result};
use crate::mesh::RenderMesh;

/// Save a mesh to a binary STL file.
///
/// # Example
///
/// ```no_run
/// use automesh::io::stl;
/// use automesh::shapes;
///
/// let mesh = shapes::cube().build().unwrap();
/// stl::save(&mesh.render_mesh(), "cube.stl").unwrap();
/// ```
pub fn save<P: AsRef<Path>>(mesh: &RenderMesh, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    write(mesh, &mut writer).map_err(|e| MeshError::SaveError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    writer.flush()?;
    Ok(())
}

/// Write a mesh in binary STL format to any writer.
pub fn write<W: Write>(mesh: &RenderMesh, writer: &mut W) -> std::io::Result<()> {
    let triangles: Vec<stl_io::Triangle> = mesh
        .triangles()
        .map(|[a, b, c]| {
            let p0 = &mesh.positions[a];
            let p1 = &mesh.positions[b];
            let p2 = &mesh.positions[c];
            let n = triangle_normal(p0, p1, p2);

            stl_io::Triangle {
                normal: stl_io::Normal::new([n.x as f32, n.y as f32, n.z as f32]),
                vertices: [
                    stl_io::Vertex::new([p0.x as f32, p0.y as f32, p0.z as f32]),
                    stl_io::Vertex::new([p1.x as f32, p1.y as f32, p1.z as f32]),
                    stl_io::Vertex::new([p2.x as f32, p2.y as f32, p2.z as f32]),
                ],
            }
        })
        .collect();

    stl_io::write_stl(writer, triangles.iter())
}
