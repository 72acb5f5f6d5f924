//! PLY (Stanford polygon) export.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::mesh::RenderMesh;

/// Save a mesh to a PLY file (ASCII format) with per-vertex normals.
///
/// # Example
///
/// ```no_run
/// use automesh::io::ply;
/// use automesh::shapes;
///
/// let mesh = shapes::cube().build().unwrap();
/// ply::save(&mesh.render_mesh(), "cube.ply").unwrap();
/// ```
pub fn save<P: AsRef<Path>>(mesh: &RenderMesh, path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    write(mesh, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a mesh in ASCII PLY format to any writer.
pub fn write<W: Write>(mesh: &RenderMesh, writer: &mut W) -> Result<()> {
    // Write header
    writeln!(writer, "ply")?;
    writeln!(writer, "format ascii 1.0")?;
    writeln!(writer, "comment Generated by automesh")?;
    writeln!(writer, "element vertex {}", mesh.num_vertices())?;
    writeln!(writer, "property float x")?;
    writeln!(writer, "property float y")?;
    writeln!(writer, "property float z")?;
    writeln!(writer, "property float nx")?;
    writeln!(writer, "property float ny")?;
    writeln!(writer, "property float nz")?;
    writeln!(writer, "element face {}", mesh.triangle_count())?;
    writeln!(writer, "property list uchar int vertex_indices")?;
    writeln!(writer, "end_header")?;

    // Write vertices
    for (p, n) in mesh.positions.iter().zip(&mesh.normals) {
        writeln!(writer, "{} {} {} {} {} {}", p.x, p.y, p.z, n.x, n.y, n.z)?;
    }

    // Write faces
    for [a, b, c] in mesh.triangles() {
        writeln!(writer, "3 {} {} {}", a, b, c)?;
    }

    Ok(())
}
