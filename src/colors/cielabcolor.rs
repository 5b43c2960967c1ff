//! This file implements the [CIELAB color
//! space](https://en.wikipedia.org/wiki/Lab_color_space#CIELAB): the perceptually-uniform space
//! the whole conversion pipeline is aimed at. CIELAB has a luminance axis `L` and two opponent
//! color axes `a` and `b`, laid out so that straight-line movement corresponds (roughly) to equal
//! perceived change, which is what makes it the space where color-difference formulas like CIE94
//! are defined. Formally the components are L\*, a\*, and b\*; here they are just `l`, `a`, and
//! `b`.

use color::{Color, XYZColor};
use coord::Coord;
use illuminants::Illuminant;

/// A color in the CIELAB color space, relative to some reference white.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CIELABColor {
    /// The luminance of the color: 0 is black and 100 is the reference (diffuse) white. Values
    /// outside that nominal range are possible for inputs brighter than the reference.
    pub l: f64,
    /// The first opponent color axis, running from green (negative) to magenta (positive).
    /// Unbounded in principle, though colors from the sRGB gamut stay within roughly ±128.
    pub a: f64,
    /// The second opponent color axis, running from blue (negative) to yellow (positive), with
    /// the same nominal range as `a`.
    pub b: f64,
}

impl CIELABColor {
    /// Converts a CIE XYZ color to CIELAB, normalizing against the white point of the given
    /// illuminant. The pipeline's own conversions always pass D65 here (the illuminant the sRGB
    /// matrix assumes); other illuminants are for callers bringing their own XYZ data.
    ///
    /// Each normalized axis goes through the CIE forward function: a cube root above the 0.008856
    /// breakpoint, and the linear ramp `7.787·v + 16/116` below it. The ramp is not an
    /// approximation to be simplified away: the cube root's slope blows up at zero, and the CIE
    /// convention is to cut over to the ramp for near-black values. All three constants are exact
    /// literals from the standard.
    pub fn from_xyz(xyz: XYZColor, illuminant: Illuminant) -> CIELABColor {
        let f = |v: f64| {
            if v > 0.008856 {
                v.powf(1.0 / 3.0)
            } else {
                7.787 * v + 16.0 / 116.0
            }
        };
        let white_point = illuminant.white_point();
        let x = f(xyz.x / white_point[0]);
        let y = f(xyz.y / white_point[1]);
        let z = f(xyz.z / white_point[2]);

        // the remapped axes account for the nonlinearity of human lightness perception, so what
        // remains is linear: a and b are opponent color differences
        CIELABColor {
            l: 116.0 * y - 16.0,
            a: 500.0 * (x - y),
            b: 200.0 * (y - z),
        }
    }

    /// The chroma of this color: the magnitude `sqrt(a² + b²)` of its opponent-axis vector, 0 for
    /// grays and growing with colorfulness. This is the `C` that the CIE94 formula weights its
    /// chroma and hue terms by.
    pub fn chroma(&self) -> f64 {
        (self.a * self.a + self.b * self.b).sqrt()
    }
}

impl Color for CIELABColor {
    fn to_lab(&self) -> CIELABColor {
        *self
    }
}

impl From<Coord> for CIELABColor {
    fn from(c: Coord) -> CIELABColor {
        CIELABColor {
            l: c.x,
            a: c.y,
            b: c.z,
        }
    }
}

impl Into<Coord> for CIELABColor {
    fn into(self) -> Coord {
        Coord {
            x: self.l,
            y: self.a,
            z: self.b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::ApproxEqUlps;

    #[test]
    fn test_reference_white_maps_to_lab_white() {
        // the D65 white point normalizes to exactly (1, 1, 1), so the result is exact: L = 100
        // and both opponent axes vanish
        let white = XYZColor {
            x: 95.047,
            y: 100.000,
            z: 108.883,
        };
        let lab = CIELABColor::from_xyz(white, Illuminant::D65);
        assert!(lab.l.approx_eq_ulps(&100.0, 2));
        assert!(lab.a.approx_eq_ulps(&0.0, 2));
        assert!(lab.b.approx_eq_ulps(&0.0, 2));
    }

    #[test]
    fn test_near_black_linear_ramp() {
        // RGB (1, 1, 1) normalizes far below the 0.008856 breakpoint on every axis, exercising
        // the linear ramp rather than the cube root
        let lab = ::color::RGBColor::from((1, 1, 1)).to_lab();
        assert!((lab.l - 0.2741734960237956).abs() <= 1e-10);
        assert!(lab.a.abs() <= 1e-3);
        assert!(lab.b.abs() <= 1e-3);
    }

    #[test]
    fn test_pure_red_lab() {
        let lab = ::color::RGBColor::from((255, 0, 0)).to_lab();
        assert!((lab.l - 53.23288178584245).abs() <= 1e-6);
        assert!((lab.a - 80.10930952982204).abs() <= 1e-6);
        assert!((lab.b - 67.22006831026425).abs() <= 1e-6);
    }

    #[test]
    fn test_d50_normalization_differs() {
        // same XYZ point, different reference white: the opponent axes shift
        let xyz = XYZColor {
            x: 41.24,
            y: 21.26,
            z: 1.9300000000000002,
        };
        let lab_d50 = CIELABColor::from_xyz(xyz, Illuminant::D50);
        assert!((lab_d50.l - 53.23288178584245).abs() <= 1e-6);
        assert!((lab_d50.a - 78.30139463663494).abs() <= 1e-6);
        assert!((lab_d50.b - 62.17165911602452).abs() <= 1e-6);
    }

    #[test]
    fn test_chroma() {
        let lab = CIELABColor {
            l: 50.0,
            a: 30.0,
            b: 40.0,
        };
        assert!((lab.chroma() - 50.0).abs() <= 1e-10);
        let gray = CIELABColor {
            l: 50.0,
            a: 0.0,
            b: 0.0,
        };
        assert_eq!(gray.chroma(), 0.0);
    }
}
