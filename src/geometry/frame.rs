use std::fmt;

/// Plain `[x, y, z]` coordinates, converted to kernel points at the edges
pub type Vec3 = [f64; 3];

pub fn sub(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

pub fn dot(a: Vec3, b: Vec3) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

pub fn scale(v: Vec3, k: f64) -> Vec3 {
    [v[0] * k, v[1] * k, v[2] * k]
}

pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// Normalize a vector, returning `None` for zero-length input
pub fn normalize(v: Vec3) -> Option<Vec3> {
    let len = dot(v, v).sqrt();
    if len > 1e-12 && len.is_finite() {
        Some([v[0] / len, v[1] / len, v[2] / len])
    } else {
        None
    }
}

/// Axis-aligned outward face direction, written `+X`, `-Y`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceNormal {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

impl FaceNormal {
    /// Index of the axis this direction runs along
    pub fn axis(self) -> usize {
        match self {
            FaceNormal::PosX | FaceNormal::NegX => 0,
            FaceNormal::PosY | FaceNormal::NegY => 1,
            FaceNormal::PosZ | FaceNormal::NegZ => 2,
        }
    }

    pub fn is_positive(self) -> bool {
        matches!(self, FaceNormal::PosX | FaceNormal::PosY | FaceNormal::PosZ)
    }

    pub fn vector(self) -> Vec3 {
        match self {
            FaceNormal::PosX => [1.0, 0.0, 0.0],
            FaceNormal::NegX => [-1.0, 0.0, 0.0],
            FaceNormal::PosY => [0.0, 1.0, 0.0],
            FaceNormal::NegY => [0.0, -1.0, 0.0],
            FaceNormal::PosZ => [0.0, 0.0, 1.0],
            FaceNormal::NegZ => [0.0, 0.0, -1.0],
        }
    }
}

impl fmt::Display for FaceNormal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FaceNormal::PosX => "+X",
            FaceNormal::NegX => "-X",
            FaceNormal::PosY => "+Y",
            FaceNormal::NegY => "-Y",
            FaceNormal::PosZ => "+Z",
            FaceNormal::NegZ => "-Z",
        };
        f.write_str(s)
    }
}

/// Placement of a plane: origin, outward normal and an in-plane basis
///
/// `x_dir` is `Z x normal`, or `+X` when the normal is parallel to Z.
/// `y_dir` completes a right-handed basis (`x_dir x y_dir = normal`), so a
/// polygon that is counter-clockwise in `(u, v)` is counter-clockwise when
/// seen from the side the normal points to. On a vertical face this puts
/// `y_dir` along +Z, which keeps engraved text upright.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceFrame {
    pub origin: Vec3,
    pub normal: Vec3,
    pub x_dir: Vec3,
    pub y_dir: Vec3,
}

impl FaceFrame {
    /// Create a frame; `normal` must be unit length
    pub fn new(origin: Vec3, normal: Vec3) -> Self {
        let x_dir = normalize(cross([0.0, 0.0, 1.0], normal)).unwrap_or([1.0, 0.0, 0.0]);
        let y_dir = cross(normal, x_dir);
        Self {
            origin,
            normal,
            x_dir,
            y_dir,
        }
    }

    /// Map plane coordinates `(u, v)` plus an offset along the normal to 3D
    pub fn lift(&self, u: f64, v: f64, offset: f64) -> Vec3 {
        let o = self.origin;
        let (x, y, n) = (self.x_dir, self.y_dir, self.normal);
        [
            o[0] + x[0] * u + y[0] * v + n[0] * offset,
            o[1] + x[1] * u + y[1] * v + n[1] * offset,
            o[2] + x[2] * u + y[2] * v + n[2] * offset,
        ]
    }

    /// Project a 3D point onto the plane coordinates
    pub fn project(&self, p: Vec3) -> (f64, f64) {
        let d = sub(p, self.origin);
        (dot(d, self.x_dir), dot(d, self.y_dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec(actual: Vec3, expected: Vec3) {
        for i in 0..3 {
            assert!(
                (actual[i] - expected[i]).abs() < 1e-12,
                "{actual:?} != {expected:?}"
            );
        }
    }

    #[test]
    fn test_side_frames_keep_text_upright() {
        for normal in [
            FaceNormal::PosX,
            FaceNormal::NegX,
            FaceNormal::PosY,
            FaceNormal::NegY,
        ] {
            let frame = FaceFrame::new([0.0; 3], normal.vector());
            assert_vec(frame.y_dir, [0.0, 0.0, 1.0]);
            assert_vec(cross(frame.x_dir, frame.y_dir), normal.vector());
        }
    }

    #[test]
    fn test_plus_x_reads_along_plus_y() {
        let frame = FaceFrame::new([1.0, 0.0, 0.0], FaceNormal::PosX.vector());
        assert_vec(frame.x_dir, [0.0, 1.0, 0.0]);

        let frame = FaceFrame::new([0.0, 1.0, 0.0], FaceNormal::PosY.vector());
        assert_vec(frame.x_dir, [-1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_vertical_normal_falls_back_to_x() {
        let frame = FaceFrame::new([0.0; 3], FaceNormal::NegZ.vector());
        assert_vec(frame.x_dir, [1.0, 0.0, 0.0]);
        assert_vec(frame.y_dir, [0.0, -1.0, 0.0]);
    }

    #[test]
    fn test_lift_project_roundtrip() {
        let frame = FaceFrame::new([2.0, -1.0, 0.5], FaceNormal::NegX.vector());
        let p = frame.lift(0.25, -0.75, 0.0);
        let (u, v) = frame.project(p);
        assert!((u - 0.25).abs() < 1e-12);
        assert!((v + 0.75).abs() < 1e-12);
        assert_eq!(frame.lift(0.0, 0.0, 1.0), [1.0, -1.0, 0.5]);
    }

    #[test]
    fn test_face_normal_axis() {
        assert_eq!(FaceNormal::NegY.axis(), 1);
        assert!(FaceNormal::PosZ.is_positive());
        assert!(!FaceNormal::NegX.is_positive());
        assert_eq!(FaceNormal::NegZ.to_string(), "-Z");
    }
}
