//! This module contains the color-space types that bracket the conversion pipeline: [`HSLColor`]
//! at the input end and [`CIELABColor`] at the output end. (The intermediate sRGB and XYZ types
//! live in the [`color`](../color/index.html) module alongside the `Color` trait.) For
//! convenience, each type is re-exported into this module's namespace directly.
//!
//! [`HSLColor`]: hslcolor/struct.HSLColor.html
//! [`CIELABColor`]: cielabcolor/struct.CIELABColor.html

pub mod cielabcolor;
pub mod hslcolor;

pub use self::cielabcolor::CIELABColor;
pub use self::hslcolor::HSLColor;
