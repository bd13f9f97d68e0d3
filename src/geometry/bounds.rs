use super::frame::Vec3;

/// Axis-aligned bounding box in model coordinates (mm)
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    /// Create bounds from a set of points
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vec3>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bounds = Self {
            min: first,
            max: first,
        };
        for p in points {
            bounds.expand(p);
        }
        Some(bounds)
    }

    pub fn expand(&mut self, p: Vec3) {
        for i in 0..3 {
            self.min[i] = self.min[i].min(p[i]);
            self.max[i] = self.max[i].max(p[i]);
        }
    }

    pub fn size(&self) -> [f64; 3] {
        [
            self.max[0] - self.min[0],
            self.max[1] - self.min[1],
            self.max[2] - self.min[2],
        ]
    }

    pub fn center(&self) -> Vec3 {
        [
            (self.min[0] + self.max[0]) / 2.0,
            (self.min[1] + self.max[1]) / 2.0,
            (self.min[2] + self.max[2]) / 2.0,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_from_points() {
        let points = vec![[0.0, 0.0, 1.0], [1000.0, -2000.0, 0.0], [500.0, 1000.0, 3.0]];
        let bounds = BoundingBox::from_points(points).unwrap();

        assert_eq!(bounds.min, [0.0, -2000.0, 0.0]);
        assert_eq!(bounds.max, [1000.0, 1000.0, 3.0]);
        assert_eq!(bounds.size(), [1000.0, 3000.0, 3.0]);
        assert_eq!(bounds.center(), [500.0, -500.0, 1.5]);
    }

    #[test]
    fn test_bounds_empty() {
        assert!(BoundingBox::from_points(Vec::new()).is_none());
    }
}
