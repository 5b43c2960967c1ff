//! This file defines the [`Color`] trait, the backbone of the crate, along with the two color
//! types that sit in the middle of the conversion pipeline: [`RGBColor`] for gamma-encoded sRGB
//! and [`XYZColor`] for the CIE 1931 tristimulus space. Every color type converts *forward*,
//! toward CIELAB: the pipeline runs HSL → sRGB → XYZ → CIELAB, and the trait's provided
//! [`distance`](trait.Color.html#method.distance) method finishes the trip by scoring two CIELAB
//! points with the CIE94 formula. Each conversion returns a fresh value; nothing is shared or
//! mutated between stages.
//!
//! [`Color`]: trait.Color.html
//! [`RGBColor`]: struct.RGBColor.html
//! [`XYZColor`]: struct.XYZColor.html

use std::fmt;

use colors::cielabcolor::CIELABColor;
use consts;
use coord::Coord;
use distance::{cie94, Cie94Mode};
use illuminants::Illuminant;

/// Any color representation that can be carried forward to CIELAB. Implementing [`to_lab`] is
/// enough to get the perceptual [`distance`] method for free, against any other `Color` type: the
/// two sides of a comparison do not need to live in the same space.
///
/// [`to_lab`]: #tymethod.to_lab
/// [`distance`]: #method.distance
pub trait Color {
    /// Converts this color to a CIELAB point under the D65/2° reference white, running whatever
    /// part of the conversion pipeline lies between this space and CIELAB.
    fn to_lab(&self) -> CIELABColor;

    /// Returns the CIE94 Delta-E between this color and another: a non-negative value that is 0
    /// exactly when the two colors land on the same CIELAB point, and grows as the colors become
    /// easier to tell apart. A Delta-E near 1 is roughly the smallest difference a trained
    /// observer notices.
    ///
    /// CIE94 is not symmetric: `self` is the reference color, and its chroma alone decides the
    /// chroma and hue weighting of the comparison, so `a.distance(&b, mode)` and
    /// `b.distance(&a, mode)` generally differ unless the two chromas agree. This is a defining
    /// property of the formula, not an accident.
    fn distance<T: Color>(&self, other: &T, mode: Cie94Mode) -> f64 {
        cie94(&self.to_lab(), &other.to_lab(), mode)
    }
}

/// A color in the sRGB space, the gamma-encoded RGB that monitors and the web speak. Channels are
/// on the usual 0–255 scale but stored as `f64`: values produced by
/// [`HSLColor::to_rgb`](../colors/hslcolor/struct.HSLColor.html#method.to_rgb) are whole numbers,
/// but fractional channels are accepted and carried through conversion at full precision, for
/// callers who want to avoid the quantization loss of rounding.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RGBColor {
    /// The red channel, 0–255.
    pub r: f64,
    /// The green channel, 0–255.
    pub g: f64,
    /// The blue channel, 0–255.
    pub b: f64,
}

/// Undoes the sRGB transfer function for one channel already normalized to 0–1, returning linear
/// light intensity. The 0.04045 breakpoint and both branch formulas are the exact literals from
/// the sRGB standard; the low branch exists because the pure power curve has the wrong slope near
/// black.
fn linearize(v: f64) -> f64 {
    if v > 0.04045 {
        ((v + 0.055) / 1.055).powf(2.4)
    } else {
        v / 12.92
    }
}

impl RGBColor {
    /// Converts this color to CIE 1931 XYZ under D65/2°. Each channel is normalized to 0–1,
    /// linearized through the inverse sRGB gamma, scaled to 0–100, and pushed through the
    /// standard sRGB-to-XYZ matrix.
    pub fn to_xyz(&self) -> XYZColor {
        let lin = vector![
            linearize(self.r / 255.0) * 100.0,
            linearize(self.g / 255.0) * 100.0,
            linearize(self.b / 255.0) * 100.0
        ];
        let xyz = &consts::STANDARD_RGB_TRANSFORM_MAT() * &lin;
        XYZColor {
            x: xyz[0],
            y: xyz[1],
            z: xyz[2],
        }
    }
}

impl Color for RGBColor {
    fn to_lab(&self) -> CIELABColor {
        self.to_xyz().to_lab()
    }
}

impl From<(u8, u8, u8)> for RGBColor {
    fn from(rgb: (u8, u8, u8)) -> RGBColor {
        let (r, g, b) = rgb;
        RGBColor {
            r: f64::from(r),
            g: f64::from(g),
            b: f64::from(b),
        }
    }
}

impl From<Coord> for RGBColor {
    fn from(c: Coord) -> RGBColor {
        RGBColor {
            r: c.x,
            g: c.y,
            b: c.z,
        }
    }
}

impl Into<Coord> for RGBColor {
    fn into(self) -> Coord {
        Coord {
            x: self.r,
            y: self.g,
            z: self.b,
        }
    }
}

impl fmt::Display for RGBColor {
    /// Writes the color as an uppercase hex code, rounding each channel half away from zero and
    /// clamping to the displayable 0–255 range.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let byte = |v: f64| v.round().max(0.0).min(255.0) as u8;
        write!(
            f,
            "#{:02X}{:02X}{:02X}",
            byte(self.r),
            byte(self.g),
            byte(self.b)
        )
    }
}

/// A point in the CIE 1931 XYZ space: device-independent tristimulus values on a 0–100 scale,
/// relative to the D65 illuminant and the 2° standard observer that the sRGB transform assumes.
/// Under normal inputs all three components are non-negative, with Y (luminance) reaching 100 at
/// the reference white.
///
/// Unlike the other color types, `XYZColor` has no `Coord` embedding: distances taken directly in
/// tristimulus space are meaningless enough that the crate declines to make them convenient.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct XYZColor {
    /// The X tristimulus component.
    pub x: f64,
    /// The Y (luminance) component.
    pub y: f64,
    /// The Z tristimulus component.
    pub z: f64,
}

impl XYZColor {
    /// Converts to CIELAB against the D65/2° reference white, the illuminant this crate's whole
    /// pipeline is anchored to. To normalize against a different white point, use
    /// [`CIELABColor::from_xyz`](../colors/cielabcolor/struct.CIELABColor.html#method.from_xyz)
    /// directly.
    pub fn to_lab(&self) -> CIELABColor {
        CIELABColor::from_xyz(*self, Illuminant::D65)
    }
}

impl Color for XYZColor {
    fn to_lab(&self) -> CIELABColor {
        CIELABColor::from_xyz(*self, Illuminant::D65)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_xyz_black() {
        let xyz = RGBColor::from((0, 0, 0)).to_xyz();
        assert_eq!(xyz.x, 0.0);
        assert_eq!(xyz.y, 0.0);
        assert_eq!(xyz.z, 0.0);
    }

    #[test]
    fn test_rgb_to_xyz_white_point() {
        // full-intensity white lands on the matrix row sums, which sit within rounding error of
        // the D65 reference white
        let xyz = RGBColor::from((255, 255, 255)).to_xyz();
        assert!((xyz.x - 95.047).abs() <= 0.05);
        assert!((xyz.y - 100.000).abs() <= 0.05);
        assert!((xyz.z - 108.883).abs() <= 0.05);
    }

    #[test]
    fn test_rgb_to_xyz_pure_red() {
        // full red hits the gamma curve at exactly 1.0, so the result is the matrix's first
        // column scaled by 100
        let xyz = RGBColor::from((255, 0, 0)).to_xyz();
        assert!((xyz.x - 41.24).abs() <= 1e-10);
        assert!((xyz.y - 21.26).abs() <= 1e-10);
        assert!((xyz.z - 1.93).abs() <= 1e-10);
    }

    #[test]
    fn test_rgb_to_xyz_linear_branch() {
        // (1, 1, 1) is far below the 0.04045 breakpoint, so every channel takes the linear
        // branch of the inverse gamma
        let xyz = RGBColor::from((1, 1, 1)).to_xyz();
        assert!((xyz.x - 0.028850239786317004).abs() <= 1e-12);
        assert!((xyz.y - 0.03035269835488375).abs() <= 1e-12);
        assert!((xyz.z - 0.03305408850846841).abs() <= 1e-12);
    }

    #[test]
    fn test_fractional_channels_accepted() {
        // unrounded channels convert smoothly: a half-step of red sits between its neighbors
        let lo = RGBColor { r: 100.0, g: 0.0, b: 0.0 }.to_xyz();
        let mid = RGBColor { r: 100.5, g: 0.0, b: 0.0 }.to_xyz();
        let hi = RGBColor { r: 101.0, g: 0.0, b: 0.0 }.to_xyz();
        assert!(lo.x < mid.x && mid.x < hi.x);
    }

    #[test]
    fn test_hex_display() {
        assert_eq!(RGBColor::from((110, 102, 204)).to_string(), "#6E66CC");
        assert_eq!(RGBColor::from((0, 0, 0)).to_string(), "#000000");
        assert_eq!(RGBColor::from((255, 255, 255)).to_string(), "#FFFFFF");
    }

    #[test]
    fn test_cross_space_distance() {
        // distance is defined between any two Color impls, whatever their spaces
        let rgb = RGBColor::from((255, 0, 0));
        let xyz = rgb.to_xyz();
        let de = rgb.distance(&xyz, ::distance::Cie94Mode::GraphicArts);
        assert!(de.abs() <= 1e-10);
    }
}
