//! Stroke font rendering to filled 2D outlines
//!
//! Each glyph is a set of polylines. Every polyline segment is widened into a
//! rectangle with square caps, which also fills the outside of the corners,
//! and all pieces of a line of text are merged with a polygon union. The
//! result is a multipolygon in plane coordinates, centered on the origin,
//! ready to be engraved.

pub mod glyphs;

use geo::{BooleanOps, BoundingRect, Coord, LineString, MultiPolygon, Polygon, Rect};

use crate::config::label::CAP_HEIGHT_RATIO;
use crate::config::stroke::{CELL_HEIGHT, CHAR_SPACING, STROKE_WIDTH};

pub use glyphs::{Glyph, glyph, glyph_or_box, glyph_width};

/// Filled outline of a line of text
#[derive(Debug, Clone)]
pub struct TextOutline {
    pub text: String,
    pub shape: MultiPolygon<f64>,
}

impl TextOutline {
    pub fn bounds(&self) -> Option<Rect<f64>> {
        self.shape.bounding_rect()
    }

    pub fn is_empty(&self) -> bool {
        self.shape.0.is_empty()
    }
}

/// The built-in stroke font at a given size
#[derive(Debug, Clone)]
pub struct StrokeFont {
    pub cap_height: f64,
}

impl StrokeFont {
    /// Font size is an em size; capitals are `CAP_HEIGHT_RATIO` of it
    pub fn with_font_size(font_size: f64) -> Self {
        Self {
            cap_height: font_size * CAP_HEIGHT_RATIO,
        }
    }

    /// Length of one glyph unit in mm
    fn unit(&self) -> f64 {
        self.cap_height / CELL_HEIGHT
    }

    pub fn stroke_width(&self) -> f64 {
        STROKE_WIDTH * self.unit()
    }

    /// Width of the glyph cells of `text`, not counting stroke overhang
    pub fn text_width(&self, text: &str) -> f64 {
        let count = text.chars().count();
        if count == 0 {
            return 0.0;
        }
        let cells: f64 = text.chars().map(glyph_width).sum();
        (cells + (count - 1) as f64 * CHAR_SPACING) * self.unit()
    }

    /// Outline of `text` centered on the origin, reading along +u
    pub fn outline(&self, text: &str) -> TextOutline {
        let unit = self.unit();
        let half_width = self.stroke_width() / 2.0;
        let base_y = -self.cap_height / 2.0;

        let mut cursor_x = -self.text_width(text) / 2.0;
        let mut pieces = Vec::new();
        for ch in text.chars() {
            for stroke in glyph_or_box(ch) {
                let points: Vec<Coord<f64>> = stroke
                    .iter()
                    .map(|&(sx, sy)| Coord {
                        x: cursor_x + sx * unit,
                        y: base_y + sy * unit,
                    })
                    .collect();
                pieces.extend(stroke_pieces(&points, half_width));
            }
            cursor_x += (glyph_width(ch) + CHAR_SPACING) * unit;
        }

        let shape = pieces
            .into_iter()
            .fold(MultiPolygon::new(Vec::new()), |acc, piece| {
                acc.union(&MultiPolygon::new(vec![piece]))
            });

        TextOutline {
            text: text.to_string(),
            shape,
        }
    }
}

/// Widen a polyline into overlapping polygons
fn stroke_pieces(points: &[Coord<f64>], half_width: f64) -> Vec<Polygon<f64>> {
    points
        .windows(2)
        .filter_map(|pair| segment(pair[0], pair[1], half_width))
        .collect()
}

/// Rectangle around `a`-`b`, extended by `half_width` past both ends
fn segment(a: Coord<f64>, b: Coord<f64>, half_width: f64) -> Option<Polygon<f64>> {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len = (dx * dx + dy * dy).sqrt();
    if len < 1e-12 {
        return None;
    }

    // Along the segment and perpendicular to it
    let (tx, ty) = (dx / len * half_width, dy / len * half_width);
    let (px, py) = (-ty, tx);

    let ring = LineString::from(vec![
        Coord { x: a.x - tx - px, y: a.y - ty - py },
        Coord { x: b.x + tx - px, y: b.y + ty - py },
        Coord { x: b.x + tx + px, y: b.y + ty + py },
        Coord { x: a.x - tx + px, y: a.y - ty + py },
    ]);
    Some(Polygon::new(ring, Vec::new()))
}
