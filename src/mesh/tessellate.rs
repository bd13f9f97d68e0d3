use truck_meshalgo::prelude::*;
use truck_polymesh::PolygonMesh;

use super::builder::{MeshBuilder, Triangle};
use crate::config::kernel::TESSELLATION_TOLERANCE;
use crate::error::{GeometryError, Result};
use crate::geometry::Solid;

/// Triangulate every face of a solid
///
/// Faces share their boundary polylines, so neighbouring faces meet exactly.
/// Triangles wind counter-clockwise around the face's outward normal.
pub fn tessellate(solid: &Solid) -> Result<Vec<Triangle>> {
    let mut mesh: PolygonMesh = solid.triangulation(TESSELLATION_TOLERANCE).to_polygon();
    mesh.put_together_same_attrs(truck_base::tolerance::TOLERANCE);
    mesh.remove_unused_attrs();

    let positions = mesh.positions();
    let point = |index: usize| {
        let p = positions[index];
        [p.x, p.y, p.z]
    };

    let mut builder = MeshBuilder::new();
    for tri in mesh.faces().triangle_iter() {
        builder.add_triangle(point(tri[0].pos), point(tri[1].pos), point(tri[2].pos));
    }
    if builder.is_empty() {
        return Err(GeometryError::EmptyMesh);
    }
    Ok(builder.finish())
}
