//! STEP (ISO 10303-21) export

use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use truck_stepio::out;

use crate::geometry::Solid;

/// Write a solid as a STEP file, replacing any existing file
pub fn write_step(path: &Path, solid: &Solid) -> Result<()> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let compressed = solid.compress();
    let header = out::StepHeaderDescriptor {
        file_name: step_text(&file_name),
        organization_system: format!("calicube {}", env!("CARGO_PKG_VERSION")),
        ..Default::default()
    };

    let step_string =
        out::CompleteStepDisplay::new(out::StepModel::from(&compressed), header).to_string();

    fs::write(path, step_string)
        .with_context(|| format!("Failed to write STEP file: {}", path.display()))?;
    Ok(())
}

/// Encode text for a quoted ISO 10303-21 string
///
/// Quotes and backslashes are doubled. Characters outside printable ASCII
/// are written as UTF-16 code units in a `\X2\ ... \X0\` run.
pub fn step_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut wide: Vec<u16> = Vec::new();

    for ch in s.chars() {
        if ch.is_ascii_graphic() || ch == ' ' {
            flush_wide(&mut out, &mut wide);
            match ch {
                '\'' => out.push_str("''"),
                '\\' => out.push_str("\\\\"),
                _ => out.push(ch),
            }
        } else {
            let mut units = [0u16; 2];
            wide.extend_from_slice(ch.encode_utf16(&mut units));
        }
    }
    flush_wide(&mut out, &mut wide);
    out
}

fn flush_wide(out: &mut String, wide: &mut Vec<u16>) {
    if wide.is_empty() {
        return;
    }
    out.push_str("\\X2\\");
    for unit in wide.drain(..) {
        let _ = write!(out, "{unit:04X}");
    }
    out.push_str("\\X0\\");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::cube;
    use tempfile::tempdir;

    #[test]
    fn test_write_step() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cube.step");
        let cube = cube(2.0).unwrap();

        write_step(&path, &cube).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("ISO-10303-21;"));
        assert!(contents.contains("'cube.step'"));
        assert!(contents.contains("CLOSED_SHELL"));
        assert!(contents.contains("END-ISO-10303-21;"));
    }

    #[test]
    fn test_non_ascii_file_name_is_escaped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("würfel.step");
        write_step(&path, &cube(2.0).unwrap()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.is_ascii());
        assert!(contents.contains("'w\\X2\\00FC\\X0\\rfel.step'"));
    }

    #[test]
    fn test_step_text() {
        assert_eq!(step_text("cube.step"), "cube.step");
        assert_eq!(step_text("it's"), "it''s");
        assert_eq!(step_text("a\\b"), "a\\\\b");
        assert_eq!(step_text("Größe"), "Gr\\X2\\00F600DF\\X0\\e");
        // characters outside the BMP become surrogate pairs
        assert_eq!(step_text("\u{1F9CA}"), "\\X2\\D83EDDCA\\X0\\");
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("cube.step");

        let err = write_step(&path, &cube(2.0).unwrap()).unwrap_err();
        assert!(err.to_string().contains("Failed to write STEP file"));
    }
}
