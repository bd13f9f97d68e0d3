//! Cutting a text outline into a planar face
//!
//! Every outline polygon becomes a cutting tool: the polygon is placed on the
//! face plane, raised clear of the surface and swept into the solid past the
//! engrave depth. The tools are subtracted one at a time. Counters (the inside
//! of a `0`, `6`, ...) are holes in their tool, so they stay at the surface.

use geo::orient::{Direction, Orient};
use geo::{LineString, Rect};
use tracing::debug;
use truck_modeling::builder;

use super::frame::{FaceFrame, FaceNormal, scale};
use super::solid::{Edge, Solid, Vertex, Wire, select_face, to_point, to_vector};
use crate::config::kernel::{POINT_EPSILON, SHAPEOPS_TOLERANCE};
use crate::error::{GeometryError, Result};
use crate::text::TextOutline;

type Ring = Vec<(f64, f64)>;

/// An outline polygon with open rings; exterior counter-clockwise, holes clockwise
#[derive(Debug, Clone)]
struct OutlinePolygon {
    exterior: Ring,
    interiors: Vec<Ring>,
}

/// Cut `outline` into the outermost face of `solid` facing `normal`
///
/// The outline is given in the face's plane coordinates and its bounding box
/// must lie inside the face. `depth` must be positive and less than half the
/// solid's thickness along `normal`.
pub fn engrave(
    solid: &Solid,
    normal: FaceNormal,
    outline: &TextOutline,
    depth: f64,
) -> Result<Solid> {
    if !(depth.is_finite() && depth > 0.0) {
        return Err(GeometryError::InvalidParameter(format!(
            "engrave depth must be a positive finite number, got {depth}"
        )));
    }

    let face = select_face(solid, normal)?;
    if depth * 2.0 >= face.thickness {
        return Err(GeometryError::InvalidParameter(format!(
            "engrave depth {depth} is too deep for a solid {} thick",
            face.thickness
        )));
    }

    if outline.is_empty() {
        debug!(face = %normal, text = %outline.text, "nothing to engrave");
        return Ok(solid.clone());
    }
    if !outline.bounds().is_some_and(|bounds| fits(&face.region, &bounds)) {
        return Err(GeometryError::LabelDoesNotFit {
            text: outline.text.clone(),
            normal,
        });
    }

    let polygons = clean_outline(outline);
    let mut result = solid.clone();
    for polygon in &polygons {
        let tool = cutting_tool(&face.frame, polygon, depth)?;
        result = difference(&result, &tool).ok_or_else(|| GeometryError::BooleanFailed {
            text: outline.text.clone(),
            normal,
        })?;
    }

    debug!(
        face = %normal,
        text = %outline.text,
        polygons = polygons.len(),
        faces = result.face_iter().count(),
        "engraved label"
    );
    Ok(result)
}

/// `base` minus `tool`, as the intersection with the tool's complement
fn difference(base: &Solid, tool: &Solid) -> Option<Solid> {
    let mut inverted = tool.clone();
    inverted.not();
    truck_shapeops::and(base, &inverted, SHAPEOPS_TOLERANCE)
}

/// Prism from `depth` above the face to `depth` below it
fn cutting_tool(frame: &FaceFrame, polygon: &OutlinePolygon, depth: f64) -> Result<Solid> {
    let clearance = depth;
    let wires: Vec<Wire> = std::iter::once(&polygon.exterior)
        .chain(&polygon.interiors)
        .map(|ring| ring_wire(frame, ring, clearance))
        .collect();
    let top = builder::try_attach_plane(&wires)?;
    let sweep = scale(frame.normal, -(depth + clearance));
    Ok(builder::tsweep(&top, to_vector(sweep)))
}

/// Closed wire through the lifted ring points, in reverse order
///
/// Reversing turns the counter-clockwise exterior into a loop whose plane
/// normal points into the solid, along the sweep.
fn ring_wire(frame: &FaceFrame, ring: &[(f64, f64)], offset: f64) -> Wire {
    let vertices: Vec<Vertex> = ring
        .iter()
        .rev()
        .map(|&(u, v)| builder::vertex(to_point(frame.lift(u, v, offset))))
        .collect();
    let n = vertices.len();
    let edges: Vec<Edge> = (0..n)
        .map(|i| builder::line(&vertices[i], &vertices[(i + 1) % n]))
        .collect();
    edges.into()
}

/// `bounds` lies strictly inside `region`
fn fits(region: &Rect<f64>, bounds: &Rect<f64>) -> bool {
    bounds.min().x > region.min().x
        && bounds.min().y > region.min().y
        && bounds.max().x < region.max().x
        && bounds.max().y < region.max().y
}

/// Orient the outline and strip closing points, duplicates and spikes
fn clean_outline(outline: &TextOutline) -> Vec<OutlinePolygon> {
    outline
        .shape
        .orient(Direction::Default)
        .0
        .iter()
        .filter_map(|polygon| {
            let exterior = clean_ring(polygon.exterior())?;
            let interiors = polygon.interiors().iter().filter_map(clean_ring).collect();
            Some(OutlinePolygon {
                exterior,
                interiors,
            })
        })
        .collect()
}

fn clean_ring(line: &LineString<f64>) -> Option<Ring> {
    let close = |a: (f64, f64), b: (f64, f64)| {
        (a.0 - b.0).abs() < POINT_EPSILON && (a.1 - b.1).abs() < POINT_EPSILON
    };

    let mut ring: Ring = Vec::with_capacity(line.0.len());
    for c in &line.0 {
        let p = (c.x, c.y);
        if ring.last().is_none_or(|&last| !close(last, p)) {
            ring.push(p);
        }
    }
    while ring.len() > 1 && close(ring[0], ring[ring.len() - 1]) {
        ring.pop();
    }

    // Remove spikes: a vertex whose neighbours coincide
    let mut i = 0;
    while ring.len() >= 3 && i < ring.len() {
        let n = ring.len();
        let prev = ring[(i + n - 1) % n];
        let next = ring[(i + 1) % n];
        if close(prev, next) {
            let next_index = (i + 1) % n;
            // Drop the spike tip and one copy of the repeated neighbour
            if next_index > i {
                ring.remove(next_index);
                ring.remove(i);
            } else {
                ring.remove(i);
                ring.remove(next_index);
            }
            i = i.saturating_sub(1);
        } else {
            i += 1;
        }
    }

    (ring.len() >= 3).then_some(ring)
}
