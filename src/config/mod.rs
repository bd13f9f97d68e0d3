/// Label constants shared by every cube.
/// All lengths in mm.
///
/// The font size is an em size: the cap height of the stroke font is
/// `FONT_SIZE * CAP_HEIGHT_RATIO`. Labels are always cut into the face,
/// `ENGRAVE_DEPTH` below the surface.
pub mod label {
    pub const FONT_SIZE: f64 = 0.5;
    pub const ENGRAVE_DEPTH: f64 = 0.1;
    pub const CAP_HEIGHT_RATIO: f64 = 0.7;

    /// Significant digits used for the size labels
    pub const SIZE_DIGITS: usize = 3;
}

/// Stroke font metrics in glyph units.
///
/// Glyphs are drawn in a cell `CELL_HEIGHT` units tall; the cell height maps
/// to the cap height. Most glyphs are `CELL_WIDTH` wide, punctuation is
/// narrower (see `text::glyphs::glyph_width`).
pub mod stroke {
    pub const CELL_WIDTH: f64 = 5.0;
    pub const CELL_HEIGHT: f64 = 7.0;
    pub const CHAR_SPACING: f64 = 1.0;
    pub const STROKE_WIDTH: f64 = 0.7;

    /// Width of `.`, `,` and `:`
    pub const NARROW_WIDTH: f64 = 1.0;
    pub const SPACE_WIDTH: f64 = 3.0;
}

/// Tolerances handed to the modeling kernel. Lengths in mm.
pub mod kernel {
    /// Outline points closer than this are merged before building cut tools
    pub const POINT_EPSILON: f64 = 1e-7;

    /// Boolean operation tolerance; well below the stroke width of a label
    pub const SHAPEOPS_TOLERANCE: f64 = 1e-4;

    /// Chord tolerance when meshing faces for STL
    pub const TESSELLATION_TOLERANCE: f64 = 1e-3;
}
