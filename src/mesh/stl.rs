use super::Triangle;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const HEADER_TEXT: &[u8] = b"calicube - labelled calibration cube";

/// Write triangles to a binary STL file, replacing any existing file
///
/// Binary STL format:
/// - 80 byte header
/// - 4 byte u32 triangle count (little endian)
/// - For each triangle:
///   - 3 x f32 normal (12 bytes)
///   - 3 x 3 x f32 vertices (36 bytes)
///   - 2 byte attribute (usually 0)
pub fn write_stl(path: &Path, triangles: &[Triangle]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create STL file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_stl_to(&mut writer, triangles)?;
    writer.flush()?;
    Ok(())
}

/// Encode binary STL into any writer
pub fn write_stl_to<W: Write>(writer: &mut W, triangles: &[Triangle]) -> Result<()> {
    let mut header = [b' '; 80];
    header[..HEADER_TEXT.len()].copy_from_slice(HEADER_TEXT);
    writer.write_all(&header)?;

    let count = u32::try_from(triangles.len()).context("Too many triangles for STL")?;
    writer.write_all(&count.to_le_bytes())?;

    for tri in triangles {
        for &n in &tri.normal {
            writer.write_all(&n.to_le_bytes())?;
        }
        for vertex in &tri.vertices {
            for &coord in vertex {
                writer.write_all(&coord.to_le_bytes())?;
            }
        }
        // Attribute byte count
        writer.write_all(&[0u8, 0u8])?;
    }

    Ok(())
}

/// Get the file size of an STL with the given number of triangles
pub fn estimate_stl_size(triangle_count: usize) -> usize {
    // 80 (header) + 4 (count) + triangles * (12 normal + 36 vertices + 2 attribute)
    80 + 4 + triangle_count * 50
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_write_stl() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.stl");

        let triangles = vec![
            Triangle::new([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            Triangle::new([0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]),
        ];

        write_stl(&path, &triangles).unwrap();

        let metadata = fs::metadata(&path).unwrap();
        assert_eq!(metadata.len(), estimate_stl_size(2) as u64);
    }

    #[test]
    fn test_stl_reads_back() {
        let triangles = vec![Triangle::new(
            [0.0, 0.0, 0.0],
            [2.0, 0.0, 0.0],
            [0.0, 3.0, 1.0],
        )];
        let mut bytes = Vec::new();
        write_stl_to(&mut bytes, &triangles).unwrap();

        let mesh = stl_io::read_stl(&mut std::io::Cursor::new(bytes)).unwrap();
        assert_eq!(mesh.faces.len(), 1);
        assert_eq!(mesh.vertices.len(), 3);
        assert!(mesh.vertices.iter().any(|v| v[1] == 3.0 && v[2] == 1.0));
    }

    #[test]
    fn test_estimate_size() {
        // Empty STL: 80 + 4 = 84 bytes
        assert_eq!(estimate_stl_size(0), 84);
        // 1 triangle: 84 + 50 = 134 bytes
        assert_eq!(estimate_stl_size(1), 134);
    }
}
