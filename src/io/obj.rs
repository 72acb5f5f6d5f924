//! Wavefront OBJ export.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::mesh::RenderMesh;

/// Save a mesh to an OBJ file.
///
/// Vertices and normals share indices, so faces are written as `f a//a b//b c//c`.
///
/// # Example
///
/// ```no_run
/// use automesh::io::obj;
/// use automesh::shapes;
///
/// let mesh = shapes::cube().build().unwrap();
/// obj::save(&mesh.render_mesh(), "cube.obj").unwrap();
/// ```
pub fn save<P: AsRef<Path>>(mesh: &RenderMesh, path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    write(mesh, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a mesh in OBJ format to any writer.
pub fn write<W: Write>(mesh: &RenderMesh, writer: &mut W) -> Result<()> {
    writeln!(writer, "# Generated by automesh")?;

    for p in &mesh.positions {
        writeln!(writer, "v {} {} {}", p.x, p.y, p.z)?;
    }
    for n in &mesh.normals {
        writeln!(writer, "vn {} {} {}", n.x, n.y, n.z)?;
    }

    // OBJ indices are 1-based
    for [a, b, c] in mesh.triangles() {
        writeln!(
            writer,
            "f {0}//{0} {1}//{1} {2}//{2}",
            a + 1,
            b + 1,
            c + 1
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes;

    #[test]
    fn test_write_cube() {
        let mesh = shapes::cube().build().unwrap().render_mesh();
        let mut out = Vec::new();
        write(&mesh, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 24);
        assert_eq!(text.lines().filter(|l| l.starts_with("vn ")).count(), 24);
        assert_eq!(text.lines().filter(|l| l.starts_with("f ")).count(), 12);

        let [a, b, c] = mesh.triangles().next().unwrap();
        let first = text.lines().find(|l| l.starts_with("f ")).unwrap();
        assert_eq!(
            first,
            format!("f {0}//{0} {1}//{1} {2}//{2}", a + 1, b + 1, c + 1)
        );
    }
}
