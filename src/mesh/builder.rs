use crate::geometry::Vec3;

/// A triangle for STL output
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    /// Three vertices: [[x, y, z], [x, y, z], [x, y, z]]
    pub vertices: [[f32; 3]; 3],
    /// Normal vector [nx, ny, nz]
    pub normal: [f32; 3],
}

impl Triangle {
    /// Create a new triangle and calculate its normal
    pub fn new(v0: [f32; 3], v1: [f32; 3], v2: [f32; 3]) -> Self {
        let vertices = [v0, v1, v2];
        Self {
            vertices,
            normal: calculate_normal(&vertices),
        }
    }

    /// Create a triangle from kernel points, narrowing to STL precision
    pub fn from_points(p0: Vec3, p1: Vec3, p2: Vec3) -> Self {
        Self::new(narrow(p0), narrow(p1), narrow(p2))
    }
}

fn narrow(p: Vec3) -> [f32; 3] {
    [p[0] as f32, p[1] as f32, p[2] as f32]
}

/// Calculate the normal vector for a triangle using the cross product
///
/// Uses the right-hand rule: counter-clockwise winding gives the outward normal
pub fn calculate_normal(vertices: &[[f32; 3]; 3]) -> [f32; 3] {
    let [v0, v1, v2] = *vertices;

    // Edge vectors
    let u = [v1[0] - v0[0], v1[1] - v0[1], v1[2] - v0[2]];
    let v = [v2[0] - v0[0], v2[1] - v0[1], v2[2] - v0[2]];

    let nx = u[1] * v[2] - u[2] * v[1];
    let ny = u[2] * v[0] - u[0] * v[2];
    let nz = u[0] * v[1] - u[1] * v[0];

    let len = (nx * nx + ny * ny + nz * nz).sqrt();
    if len > 1e-12 {
        [nx / len, ny / len, nz / len]
    } else {
        [0.0, 0.0, 1.0] // Default to up for degenerate triangles
    }
}

/// Accumulator for building triangle meshes
#[derive(Debug, Default)]
pub struct MeshBuilder {
    triangles: Vec<Triangle>,
}

impl MeshBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_triangle(&mut self, p0: Vec3, p1: Vec3, p2: Vec3) {
        self.triangles.push(Triangle::from_points(p0, p1, p2));
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Consume the builder and return the triangles
    pub fn finish(self) -> Vec<Triangle> {
        self.triangles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_normal() {
        // A triangle in the XY plane should have a Z-pointing normal
        let tri = Triangle::new([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);

        assert!((tri.normal[0]).abs() < 0.001);
        assert!((tri.normal[1]).abs() < 0.001);
        assert!((tri.normal[2] - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_mesh_builder() {
        let mut builder = MeshBuilder::new();
        assert!(builder.is_empty());

        builder.add_triangle([0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]);
        assert!(!builder.is_empty());

        let triangles = builder.finish();
        assert_eq!(triangles.len(), 1);
        assert!((triangles[0].normal[0] - 1.0).abs() < 0.001);
    }
}
