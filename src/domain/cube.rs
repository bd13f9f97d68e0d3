use crate::config::label::SIZE_DIGITS;
use crate::geometry::FaceNormal;

/// A text label cut into one face of the cube
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub face: FaceNormal,
    pub text: String,
}

/// Parameters of one calibration cube
#[derive(Debug, Clone, PartialEq)]
pub struct CubeSpec {
    pub number: i64,
    pub size: f64,
    pub tube_size: f64,
}

impl CubeSpec {
    pub fn new(number: i64, size: f64, tube_size: f64) -> Self {
        Self {
            number,
            size,
            tube_size,
        }
    }

    /// Labels in engraving order: cube size on +X, tube size on -X,
    /// cube number on +Y
    pub fn labels(&self) -> [Label; 3] {
        [
            Label {
                face: FaceNormal::PosX,
                text: format_significant(self.size, SIZE_DIGITS),
            },
            Label {
                face: FaceNormal::NegX,
                text: format_significant(self.tube_size, SIZE_DIGITS),
            },
            Label {
                face: FaceNormal::PosY,
                text: self.number.to_string(),
            },
        ]
    }
}

/// Format like C's `%.{digits}g`
///
/// Rounds to `digits` significant digits, switches to scientific notation
/// when the exponent is below -4 or at least `digits`, and drops trailing
/// zeros.
pub fn format_significant(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let digits = digits.max(1);
    // Rounded mantissa and exponent, e.g. "2.40e0"
    let sci = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exponent < -4 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
