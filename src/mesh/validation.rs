//! Mesh validation and repair before STL output
//!
//! - Detect degenerate triangles (zero area)
//! - Check for NaN/Inf coordinates
//! - Recalculate normals from winding
//! - Remove invalid geometry

use tracing::warn;

use super::Triangle;
use super::builder::calculate_normal;

/// Minimum area threshold for non-degenerate triangles (in square mm)
const MIN_TRIANGLE_AREA: f32 = 1e-12;

/// Result of mesh validation
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ValidationReport {
    /// Total number of triangles validated
    pub total: usize,
    /// Triangles with zero or near-zero area
    pub degenerate: usize,
    /// Triangles with NaN/Inf coordinates
    pub invalid_coords: usize,
    /// Triangles whose stored normal disagreed with their winding
    pub invalid_normal: usize,
}

impl ValidationReport {
    pub fn has_issues(&self) -> bool {
        self.degenerate > 0 || self.invalid_coords > 0 || self.invalid_normal > 0
    }

    /// Triangles dropped by `validate_and_fix`
    pub fn removed(&self) -> usize {
        self.degenerate + self.invalid_coords
    }
}

/// Count problems without changing the mesh
pub fn validate_mesh(triangles: &[Triangle]) -> ValidationReport {
    let mut report = ValidationReport {
        total: triangles.len(),
        ..Default::default()
    };

    for tri in triangles {
        if has_invalid_coords(tri) {
            report.invalid_coords += 1;
            continue;
        }
        if is_degenerate(tri) {
            report.degenerate += 1;
        } else if !normal_agrees(tri) {
            report.invalid_normal += 1;
        }
    }

    report
}

fn has_invalid_coords(tri: &Triangle) -> bool {
    tri.vertices.iter().flatten().any(|c| !c.is_finite())
}

fn is_degenerate(tri: &Triangle) -> bool {
    triangle_area(&tri.vertices) < MIN_TRIANGLE_AREA
}

fn triangle_area(vertices: &[[f32; 3]; 3]) -> f32 {
    let [v0, v1, v2] = *vertices;

    let a = [v1[0] - v0[0], v1[1] - v0[1], v1[2] - v0[2]];
    let b = [v2[0] - v0[0], v2[1] - v0[1], v2[2] - v0[2]];

    let cx = a[1] * b[2] - a[2] * b[1];
    let cy = a[2] * b[0] - a[0] * b[2];
    let cz = a[0] * b[1] - a[1] * b[0];

    0.5 * (cx * cx + cy * cy + cz * cz).sqrt()
}

fn normal_agrees(tri: &Triangle) -> bool {
    let expected = calculate_normal(&tri.vertices);
    let d: f32 = (0..3).map(|i| expected[i] * tri.normal[i]).sum();
    d.is_finite() && d > 0.99
}

/// Validate, fix, and clean a mesh in one pass
///
/// Normals are recomputed from winding and degenerate or non-finite
/// triangles are dropped. Issues are logged as warnings.
pub fn validate_and_fix(triangles: Vec<Triangle>) -> (Vec<Triangle>, ValidationReport) {
    let report = validate_mesh(&triangles);

    let cleaned: Vec<Triangle> = triangles
        .into_iter()
        .filter(|tri| !has_invalid_coords(tri) && !is_degenerate(tri))
        .map(|mut tri| {
            tri.normal = calculate_normal(&tri.vertices);
            tri
        })
        .collect();

    if report.has_issues() {
        warn!(
            total = report.total,
            degenerate = report.degenerate,
            invalid_coords = report.invalid_coords,
            invalid_normal = report.invalid_normal,
            "mesh needed repair before export"
        );
    }

    (cleaned, report)
}
