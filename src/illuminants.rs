//! This module provides the CIE standard illuminants the crate knows about, along with a table of
//! their white point values under the 2° standard observer, normalized so that the Y (luminance)
//! axis is 100. The pipeline itself is anchored to D65 (the sRGB transform matrix in `consts` is
//! a D65/2° matrix, so normalizing an `XYZColor` produced by it against any other white point is
//! a deliberate act), but the CIELAB conversion accepts any illuminant here, so the table keeps
//! the other common daylight references available.

/// The supported CIE standard illuminants: standardized descriptions of a particular kind of
/// lighting. All of these are daylight ("D-series") illuminants; D65, roughly 6500K daylight, is
/// the one the sRGB standard and therefore this crate's conversion pipeline assume.
#[derive(Debug, Copy, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum Illuminant {
    D50,
    D55,
    D65,
    D75,
}

/// A table of white point values for the illuminants above, one row per variant in declaration
/// order. Each white point is `[X, Y, Z]` with Y normalized to 100. The D65 row is the exact
/// reference triple the CIELAB conversion divides by, so its digits are significant to the last
/// place.
pub static ILLUMINANT_WHITE_POINTS: [[f64; 3]; 4] = [
    [96.422, 100.000, 82.521],
    [95.682, 100.000, 92.129],
    [95.047, 100.000, 108.883],
    [94.972, 100.000, 122.638],
];

impl Illuminant {
    /// Gets the XYZ coordinates of the white point of this illuminant.
    pub fn white_point(&self) -> [f64; 3] {
        match *self {
            Illuminant::D50 => ILLUMINANT_WHITE_POINTS[0],
            Illuminant::D55 => ILLUMINANT_WHITE_POINTS[1],
            Illuminant::D65 => ILLUMINANT_WHITE_POINTS[2],
            Illuminant::D75 => ILLUMINANT_WHITE_POINTS[3],
        }
    }
}
