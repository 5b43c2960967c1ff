//! This file holds the matrix constants used for color space conversion. Keeping them in one place
//! as whole matrices, instead of scattering multiplications and additions through the conversion
//! code, makes the constant table checkable against the published standard at a glance: every
//! digit below is load-bearing, and an error in one produces distances that are wrong without
//! being obviously so.

use rulinalg::matrix::Matrix;

/// The 3×3 matrix taking linearized sRGB channels (on a 0–100 scale) to CIE 1931 XYZ tristimulus
/// values, for the D65 illuminant and the 2° standard observer. The rows are X, Y, and Z; the
/// columns are R, G, and B.
#[allow(non_snake_case)]
pub fn STANDARD_RGB_TRANSFORM_MAT() -> Matrix<f64> {
    matrix![
        0.4124, 0.3576, 0.1805;
        0.2126, 0.7152, 0.0722;
        0.0193, 0.1192, 0.9505
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_sum_to_white() {
        // each row of the transform, summed, is that axis of the white point produced by feeding
        // in a full-intensity channel triple: close to, but not exactly, the D65 reference
        let m = STANDARD_RGB_TRANSFORM_MAT();
        let white = &m * &vector![100.0, 100.0, 100.0];
        assert!((white[0] - 95.047).abs() <= 0.05);
        assert!((white[1] - 100.000).abs() <= 0.05);
        assert!((white[2] - 108.883).abs() <= 0.05);
    }
}
