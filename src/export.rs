use anyhow::{Context, Result};
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;
use tracing::info;

use crate::geometry::Solid;
use crate::mesh::{estimate_stl_size, tessellate, validate_and_fix, write_stl};
use crate::step::write_step;

/// Output file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Stl,
    Step,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported export format {0:?}")]
pub struct UnsupportedFormat(pub String);

impl FromStr for ExportFormat {
    type Err = UnsupportedFormat;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stl" => Ok(ExportFormat::Stl),
            "step" => Ok(ExportFormat::Step),
            _ => Err(UnsupportedFormat(s.to_string())),
        }
    }
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Stl => "stl",
            ExportFormat::Step => "step",
        }
    }
}

/// `<filename>.<extension>`, appended rather than replacing any existing dot suffix
pub fn output_path(filename: &str, format: ExportFormat) -> PathBuf {
    PathBuf::from(format!("{filename}.{}", format.extension()))
}

/// Write `solid` to `<filename>.stl` or `<filename>.step`
///
/// Returns the written path, or `None` when `format` is neither `stl` nor
/// `step` (case-insensitive). An unsupported format prints a notice and
/// writes nothing.
pub fn export_model(solid: &Solid, filename: &str, format: &str) -> Result<Option<PathBuf>> {
    let format = match format.parse::<ExportFormat>() {
        Ok(format) => format,
        Err(_) => {
            println!("Unsupported format. Use 'stl' or 'step'.");
            return Ok(None);
        }
    };

    let path = output_path(filename, format);
    match format {
        ExportFormat::Stl => {
            let triangles = tessellate(solid).context("Failed to tessellate model")?;
            let (triangles, report) = validate_and_fix(triangles);
            write_stl(&path, &triangles)?;
            info!(
                path = %path.display(),
                triangles = triangles.len(),
                removed = report.removed(),
                bytes = estimate_stl_size(triangles.len()),
                "wrote STL"
            );
        }
        ExportFormat::Step => {
            write_step(&path, solid)?;
            info!(
                path = %path.display(),
                faces = solid.face_iter().count(),
                "wrote STEP"
            );
        }
    }

    println!("Exported as {}", path.display());
    Ok(Some(path))
}
