use crate::config::stroke::{CELL_WIDTH, NARROW_WIDTH, SPACE_WIDTH};

/// A glyph is a list of strokes; each stroke is a polyline in a 5 x 7 cell
pub type Glyph = &'static [&'static [(f64, f64)]];

/// Fallback box drawn for characters without a glyph
const MISSING: Glyph = &[&[(0.0, 0.0), (5.0, 0.0), (5.0, 7.0), (0.0, 7.0), (0.0, 0.0)]];

const O_RING: &[(f64, f64)] = &[
    (1.0, 0.0),
    (0.0, 1.0),
    (0.0, 6.0),
    (1.0, 7.0),
    (4.0, 7.0),
    (5.0, 6.0),
    (5.0, 1.0),
    (4.0, 0.0),
    (1.0, 0.0),
];

const P_BOWL: &[(f64, f64)] = &[
    (0.0, 0.0),
    (0.0, 7.0),
    (4.0, 7.0),
    (5.0, 6.0),
    (5.0, 4.0),
    (4.0, 3.0),
    (0.0, 3.0),
];

/// Advance of a character in glyph units, before spacing
pub fn glyph_width(ch: char) -> f64 {
    match ch {
        '.' | ',' | ':' => NARROW_WIDTH,
        ' ' => SPACE_WIDTH,
        _ => CELL_WIDTH,
    }
}

/// Strokes for a character, or the fallback box when the font lacks it
pub fn glyph_or_box(ch: char) -> Glyph {
    glyph(ch).unwrap_or(MISSING)
}

/// Look up the strokes for a character, case-insensitively
pub fn glyph(ch: char) -> Option<Glyph> {
    let strokes: Glyph = match ch.to_ascii_uppercase() {
        ' ' => &[],
        '0' => &[O_RING, &[(1.0, 1.0), (4.0, 6.0)]],
        '1' => &[&[(1.0, 5.0), (2.5, 7.0), (2.5, 0.0)], &[(1.0, 0.0), (4.0, 0.0)]],
        '2' => &[&[
            (0.0, 6.0),
            (1.0, 7.0),
            (4.0, 7.0),
            (5.0, 6.0),
            (5.0, 4.5),
            (0.0, 0.0),
            (5.0, 0.0),
        ]],
        '3' => &[
            &[(0.0, 6.0), (1.0, 7.0), (4.0, 7.0), (5.0, 6.0), (5.0, 4.5), (4.0, 3.5), (2.0, 3.5)],
            &[(4.0, 3.5), (5.0, 2.5), (5.0, 1.0), (4.0, 0.0), (1.0, 0.0), (0.0, 1.0)],
        ],
        '4' => &[&[(4.0, 0.0), (4.0, 7.0), (0.0, 2.5), (5.0, 2.5)]],
        '5' => &[&[
            (5.0, 7.0),
            (0.0, 7.0),
            (0.0, 4.0),
            (4.0, 4.0),
            (5.0, 3.0),
            (5.0, 1.0),
            (4.0, 0.0),
            (1.0, 0.0),
            (0.0, 1.0),
        ]],
        '6' => &[&[
            (4.0, 7.0),
            (1.0, 7.0),
            (0.0, 6.0),
            (0.0, 1.0),
            (1.0, 0.0),
            (4.0, 0.0),
            (5.0, 1.0),
            (5.0, 3.0),
            (4.0, 4.0),
            (0.0, 4.0),
        ]],
        '7' => &[&[(0.0, 7.0), (5.0, 7.0), (2.0, 0.0)]],
        '8' => &[
            &[
                (1.0, 3.5),
                (0.0, 4.5),
                (0.0, 6.0),
                (1.0, 7.0),
                (4.0, 7.0),
                (5.0, 6.0),
                (5.0, 4.5),
                (4.0, 3.5),
                (1.0, 3.5),
            ],
            &[(1.0, 3.5), (0.0, 2.5), (0.0, 1.0), (1.0, 0.0), (4.0, 0.0), (5.0, 1.0), (5.0, 2.5), (4.0, 3.5)],
        ],
        '9' => &[&[
            (1.0, 0.0),
            (4.0, 0.0),
            (5.0, 1.0),
            (5.0, 6.0),
            (4.0, 7.0),
            (1.0, 7.0),
            (0.0, 6.0),
            (0.0, 4.0),
            (1.0, 3.0),
            (5.0, 3.0),
        ]],
        // Solid dots rather than outlined squares, so small labels don't grow pinholes
        '.' => &[&[(0.0, 0.5), (1.0, 0.5)]],
        ',' => &[&[(1.0, 1.0), (1.0, 0.0), (0.0, -1.0)]],
        ':' => &[&[(0.0, 2.5), (1.0, 2.5)], &[(0.0, 5.5), (1.0, 5.5)]],
        '-' => &[&[(1.0, 3.5), (4.0, 3.5)]],
        '+' => &[&[(0.5, 3.5), (4.5, 3.5)], &[(2.5, 1.5), (2.5, 5.5)]],
        '/' => &[&[(0.0, 0.0), (5.0, 7.0)]],
        'A' => &[&[(0.0, 0.0), (2.5, 7.0), (5.0, 0.0)], &[(1.0, 3.0), (4.0, 3.0)]],
        'B' => &[
            &[(0.0, 0.0), (0.0, 7.0), (3.5, 7.0), (5.0, 6.0), (5.0, 4.5), (3.5, 3.5), (0.0, 3.5)],
            &[(3.5, 3.5), (5.0, 2.5), (5.0, 1.0), (3.5, 0.0), (0.0, 0.0)],
        ],
        'C' => &[&[
            (5.0, 1.0),
            (4.0, 0.0),
            (1.0, 0.0),
            (0.0, 1.0),
            (0.0, 6.0),
            (1.0, 7.0),
            (4.0, 7.0),
            (5.0, 6.0),
        ]],
        'D' => &[&[(0.0, 0.0), (0.0, 7.0), (3.0, 7.0), (5.0, 5.5), (5.0, 1.5), (3.0, 0.0), (0.0, 0.0)]],
        'E' => &[&[(5.0, 0.0), (0.0, 0.0), (0.0, 7.0), (5.0, 7.0)], &[(0.0, 3.5), (4.0, 3.5)]],
        'F' => &[&[(0.0, 0.0), (0.0, 7.0), (5.0, 7.0)], &[(0.0, 3.5), (4.0, 3.5)]],
        'G' => &[&[
            (5.0, 6.0),
            (4.0, 7.0),
            (1.0, 7.0),
            (0.0, 6.0),
            (0.0, 1.0),
            (1.0, 0.0),
            (4.0, 0.0),
            (5.0, 1.0),
            (5.0, 3.5),
            (2.5, 3.5),
        ]],
        'H' => &[
            &[(0.0, 0.0), (0.0, 7.0)],
            &[(5.0, 0.0), (5.0, 7.0)],
            &[(0.0, 3.5), (5.0, 3.5)],
        ],
        'I' => &[
            &[(1.0, 0.0), (4.0, 0.0)],
            &[(2.5, 0.0), (2.5, 7.0)],
            &[(1.0, 7.0), (4.0, 7.0)],
        ],
        'J' => &[&[(0.0, 1.0), (1.0, 0.0), (3.0, 0.0), (4.0, 1.0), (4.0, 7.0)], &[(2.0, 7.0), (5.0, 7.0)]],
        'K' => &[&[(0.0, 0.0), (0.0, 7.0)], &[(5.0, 7.0), (0.0, 3.5), (5.0, 0.0)]],
        'L' => &[&[(0.0, 7.0), (0.0, 0.0), (5.0, 0.0)]],
        'M' => &[&[(0.0, 0.0), (0.0, 7.0), (2.5, 4.0), (5.0, 7.0), (5.0, 0.0)]],
        'N' => &[&[(0.0, 0.0), (0.0, 7.0), (5.0, 0.0), (5.0, 7.0)]],
        'O' => &[O_RING],
        'P' => &[P_BOWL],
        'Q' => &[O_RING, &[(3.0, 2.0), (5.5, -0.5)]],
        'R' => &[P_BOWL, &[(2.5, 3.0), (5.0, 0.0)]],
        'S' => &[&[
            (5.0, 6.0),
            (4.0, 7.0),
            (1.0, 7.0),
            (0.0, 6.0),
            (0.0, 4.5),
            (1.0, 3.5),
            (4.0, 3.5),
            (5.0, 2.5),
            (5.0, 1.0),
            (4.0, 0.0),
            (1.0, 0.0),
            (0.0, 1.0),
        ]],
        'T' => &[&[(0.0, 7.0), (5.0, 7.0)], &[(2.5, 7.0), (2.5, 0.0)]],
        'U' => &[&[(0.0, 7.0), (0.0, 1.0), (1.0, 0.0), (4.0, 0.0), (5.0, 1.0), (5.0, 7.0)]],
        'V' => &[&[(0.0, 7.0), (2.5, 0.0), (5.0, 7.0)]],
        'W' => &[&[(0.0, 7.0), (1.0, 0.0), (2.5, 4.0), (4.0, 0.0), (5.0, 7.0)]],
        'X' => &[&[(0.0, 0.0), (5.0, 7.0)], &[(0.0, 7.0), (5.0, 0.0)]],
        'Y' => &[&[(0.0, 7.0), (2.5, 3.5), (5.0, 7.0)], &[(2.5, 3.5), (2.5, 0.0)]],
        'Z' => &[&[(0.0, 7.0), (5.0, 7.0), (0.0, 0.0), (5.0, 0.0)]],
        _ => return None,
    };
    Some(strokes)
}
