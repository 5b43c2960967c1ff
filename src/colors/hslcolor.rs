//! This file implements the HSL color space: a cylindrical reshaping of sRGB that trades physical
//! fidelity for human-editable components. HSL has the same perceptual-uniformity problems as the
//! sRGB cube it rearranges (equal moves in (h, s, l) are far from equal moves to the eye, which
//! is exactly why this crate scores differences in CIELAB instead of here), but it is how colors
//! arrive, so it is the front door of the conversion pipeline. This implementation is the
//! hexagonal one: hue walks the six edges of a hexagon made of piecewise-linear channel ramps,
//! rather than a true circle, which can cause tiny variations against polar implementations.
//!
//! All three components live on a 0–1 scale, hue included: a hue of 1/3 is 120°, pure green.

use color::{Color, RGBColor};
use colors::cielabcolor::CIELABColor;
use coord::Coord;

/// A color in the HSL color space, all components on a 0–1 scale.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HSLColor {
    /// The hue component, 0–1, wrapping cyclically: 0 and 1 are both red, 1/3 is green, 2/3 is
    /// blue. Values outside the range are brought back in modularly during conversion.
    pub h: f64,
    /// The saturation component, 0–1: 0 is achromatic gray, 1 is fully saturated. Clamped into
    /// range during conversion.
    pub s: f64,
    /// The lightness component, 0–1: 0 is black, 1 is white, and fully saturated colors sit at
    /// 1/2. Clamped into range during conversion.
    pub l: f64,
}

/// Evaluates one channel of the hue hexagon: given the two interpolation anchors `p` and `q` and
/// an offset hue `t`, picks among the four linear segments with breakpoints at 1/6, 1/2, and 2/3.
/// The offset hue arrives at most one period out of range (the channel offsets are ±1/3), so a
/// single wrap on either side renormalizes it into [0, 1).
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };
    match t {
        t if t < 1.0 / 6.0 => p + (q - p) * 6.0 * t,
        t if t < 1.0 / 2.0 => q,
        t if t < 2.0 / 3.0 => p + (q - p) * (2.0 / 3.0 - t) * 6.0,
        _ => p,
    }
}

impl HSLColor {
    /// Converts this color to sRGB, with each channel rounded to a whole number on the 0–255
    /// scale. Rounding is half away from zero (so a channel landing on exactly 127.5 becomes
    /// 128), which matters at channel boundaries and is pinned by test.
    ///
    /// Inputs outside the conventional ranges are made sense of rather than rejected: hue wraps
    /// modularly (a hue of 1.25 is the same color as 0.25), while saturation and lightness are
    /// clamped to [0, 1].
    pub fn to_rgb(&self) -> RGBColor {
        let h = self.h.rem_euclid(1.0);
        let s = self.s.max(0.0).min(1.0);
        let l = self.l.max(0.0).min(1.0);

        let (r, g, b) = if s == 0.0 {
            // achromatic: hue is meaningless and every channel is the lightness
            (l, l, l)
        } else {
            let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let p = 2.0 * l - q;
            (
                hue_to_channel(p, q, h + 1.0 / 3.0),
                hue_to_channel(p, q, h),
                hue_to_channel(p, q, h - 1.0 / 3.0),
            )
        };
        RGBColor {
            r: (r * 255.0).round(),
            g: (g * 255.0).round(),
            b: (b * 255.0).round(),
        }
    }
}

impl Color for HSLColor {
    fn to_lab(&self) -> CIELABColor {
        self.to_rgb().to_lab()
    }
}

impl From<Coord> for HSLColor {
    fn from(c: Coord) -> HSLColor {
        HSLColor {
            h: c.x,
            s: c.y,
            l: c.z,
        }
    }
}

impl Into<Coord> for HSLColor {
    fn into(self) -> Coord {
        Coord {
            x: self.h,
            y: self.s,
            z: self.l,
        }
    }
}
