//! Solid construction and inspection on the truck B-rep kernel

use geo::{Coord, Rect};
use truck_modeling::builder;
use truck_topology::shell::ShellCondition;

pub use truck_modeling::{Edge, Point3, Solid, Vector3, Vertex, Wire};

use super::bounds::BoundingBox;
use super::frame::{FaceFrame, FaceNormal, Vec3};
use crate::error::{GeometryError, Result};

pub fn to_point(p: Vec3) -> Point3 {
    Point3::new(p[0], p[1], p[2])
}

pub fn to_vector(v: Vec3) -> Vector3 {
    Vector3::new(v[0], v[1], v[2])
}

/// Axis-aligned cube of edge `size` centered on the origin
pub fn cube(size: f64) -> Result<Solid> {
    if !(size.is_finite() && size > 0.0) {
        return Err(GeometryError::InvalidParameter(format!(
            "cube size must be a positive finite number, got {size}"
        )));
    }

    let half = size / 2.0;
    let v = builder::vertex(Point3::new(-half, -half, -half));
    let e = builder::tsweep(&v, Vector3::unit_x() * size);
    let f = builder::tsweep(&e, Vector3::unit_y() * size);
    Ok(builder::tsweep(&f, Vector3::unit_z() * size))
}

pub fn translated(solid: &Solid, delta: Vec3) -> Solid {
    builder::translated(solid, to_vector(delta))
}

/// Bounds of the solid's vertices; every face is planar, so this is exact
pub fn bounding_box(solid: &Solid) -> Option<BoundingBox> {
    BoundingBox::from_points(solid.vertex_iter().map(|v| {
        let p = v.point();
        [p.x, p.y, p.z]
    }))
}

/// Every shell bounds a closed volume: each edge is shared by exactly two faces
pub fn is_closed(solid: &Solid) -> bool {
    solid
        .boundaries()
        .iter()
        .all(|shell| matches!(shell.shell_condition(), ShellCondition::Closed))
}

/// The outermost face of a box-shaped solid in direction `normal`
#[derive(Debug, Clone)]
pub struct FacePlacement {
    pub normal: FaceNormal,
    /// Plane of the face, origin at the center of the face
    pub frame: FaceFrame,
    /// Extent of the face in the frame's plane coordinates
    pub region: Rect<f64>,
    /// Size of the solid along the normal
    pub thickness: f64,
}

/// Locate the face on the solid's bounding box facing `normal`
pub fn select_face(solid: &Solid, normal: FaceNormal) -> Result<FacePlacement> {
    let bounds = bounding_box(solid).ok_or(GeometryError::FaceNotFound(normal))?;
    let axis = normal.axis();

    let mut origin = bounds.center();
    origin[axis] = if normal.is_positive() {
        bounds.max[axis]
    } else {
        bounds.min[axis]
    };
    let frame = FaceFrame::new(origin, normal.vector());

    let corners = [bounds.min, bounds.max];
    let mut min = (f64::INFINITY, f64::INFINITY);
    let mut max = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for i in 0..8usize {
        let mut corner = [0.0; 3];
        for (k, c) in corner.iter_mut().enumerate() {
            *c = corners[(i >> k) & 1][k];
        }
        let (u, v) = frame.project(corner);
        min = (min.0.min(u), min.1.min(v));
        max = (max.0.max(u), max.1.max(v));
    }

    Ok(FacePlacement {
        normal,
        frame,
        region: Rect::new(Coord { x: min.0, y: min.1 }, Coord { x: max.0, y: max.1 }),
        thickness: bounds.size()[axis],
    })
}
