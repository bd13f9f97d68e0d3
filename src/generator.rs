use tracing::{debug, warn};

use crate::config::label::{ENGRAVE_DEPTH, FONT_SIZE};
use crate::domain::CubeSpec;
use crate::error::Result;
use crate::geometry::{Solid, cube, engrave, is_closed, translated};
use crate::text::StrokeFont;

/// Build a labelled calibration cube resting on Z = 0
///
/// The cube size is cut into the +X face, the tube size into the -X face and
/// the cube number into the +Y face, each `ENGRAVE_DEPTH` deep.
pub fn generate_cube(cube_number: i64, cube_size: f64, tube_size: f64) -> Result<Solid> {
    let spec = CubeSpec::new(cube_number, cube_size, tube_size);
    let mut solid = cube(spec.size)?;
    let font = StrokeFont::with_font_size(FONT_SIZE);

    for label in spec.labels() {
        let outline = font.outline(&label.text);
        solid = engrave(&solid, label.face, &outline, ENGRAVE_DEPTH)?;
        debug!(face = %label.face, text = %label.text, "label engraved");
    }

    if !is_closed(&solid) {
        warn!(number = spec.number, "generated cube is not a closed solid");
    }
    Ok(translated(&solid, [0.0, 0.0, spec.size / 2.0]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeometryError;
    use crate::geometry::bounding_box;

    #[test]
    fn test_cube_rests_on_bed() {
        let cube = generate_cube(1, 2.397, 0.595).unwrap();
        let bounds = bounding_box(&cube).unwrap();

        for axis in 0..3 {
            assert!((bounds.size()[axis] - 2.397).abs() < 1e-9);
        }
        assert!(bounds.min[2].abs() < 1e-9);
        assert!((bounds.max[2] - 2.397).abs() < 1e-9);
        assert!((bounds.min[0] + 2.397 / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_generated_cube_is_closed() {
        let cube = generate_cube(12, 3.0, 0.8).unwrap();
        assert!(is_closed(&cube));
        assert!(cube.face_iter().count() > 6);
    }

    #[test]
    fn test_labels_are_cut_into_their_faces() {
        let size = 2.397;
        let cube = generate_cube(7, size, 0.595).unwrap();
        let half = size / 2.0;
        let points: Vec<[f64; 3]> = cube
            .vertex_iter()
            .map(|v| {
                let p = v.point();
                [p.x, p.y, p.z]
            })
            .collect();
        let at = |axis: usize, value: f64| points.iter().any(|p| (p[axis] - value).abs() < 1e-6);

        // pocket floors one engrave depth inside +X, -X and +Y
        assert!(at(0, half - ENGRAVE_DEPTH));
        assert!(at(0, -half + ENGRAVE_DEPTH));
        assert!(at(1, half - ENGRAVE_DEPTH));
        // nothing cut into -Y or the bottom
        assert!(!at(1, -half + ENGRAVE_DEPTH));
        assert!(!at(2, ENGRAVE_DEPTH));
    }

    #[test]
    fn test_small_cube_fits_its_labels() {
        let cube = generate_cube(1, 1.5, 0.595).unwrap();
        assert!(is_closed(&cube));
        let bounds = bounding_box(&cube).unwrap();
        assert!((bounds.size()[0] - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_label_too_large_for_cube() {
        assert!(matches!(
            generate_cube(1, 0.5, 0.5),
            Err(GeometryError::LabelDoesNotFit { .. })
        ));
    }

    #[test]
    fn test_degenerate_size() {
        for size in [0.0, -1.0, f64::NAN] {
            assert!(matches!(
                generate_cube(1, size, 0.5),
                Err(GeometryError::InvalidParameter(_))
            ));
        }
    }
}
