//! Huedelta answers one question: how different do two HSL colors *look*? Raw channel arithmetic is
//! a famously bad proxy for what human eyes report, so instead of comparing hue angles or RGB
//! channels directly, this crate walks each color through the standard chain of color-space
//! transforms (HSL to sRGB, sRGB to CIE XYZ under the D65/2° reference, XYZ to CIELAB) and then
//! scores the pair with the CIE94 color-difference formula. The result is a single non-negative
//! Delta-E value: 0 for identical colors, growing as the pair becomes easier to tell apart.
//!
//! Everything here is a pure function over small `Copy` value types. There is no state, no I/O,
//! and no configuration; what the crate guards jealously is the constant tables (gamma curve,
//! conversion matrix, white points, CIE94 weights), because a one-digit slip in any of them
//! produces distances that look plausible and are quietly wrong.
//!
//! ```
//! use huedelta::prelude::*;
//!
//! let red = HSLColor { h: 0.0, s: 1.0, l: 0.5 };
//! let blue = HSLColor { h: 0.667, s: 1.0, l: 0.5 };
//! let delta_e = red.distance(&blue, Cie94Mode::GraphicArts);
//! assert!(delta_e > 50.0); // maximally distant hues score high
//! ```

// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but this crate is built out of load-bearing decimal literals
// like 0.008856 that must appear exactly as the standards print them
#![allow(clippy::unreadable_literal)]

extern crate num;
#[macro_use]
extern crate rulinalg;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[cfg(test)]
extern crate float_cmp;

pub mod color;
pub mod colors;
mod consts;
pub mod coord;
pub mod distance;
pub mod euclidean_distance;
pub mod illuminants;
pub mod prelude;
