//! This module brings the common huedelta functionality under a single namespace, to prevent
//! excessive imports: the [`Color`] trait and every color type, the CIE94 entry points, the
//! [`Illuminant`] white point table, and the [`EuclideanDistance`] fallback metric.
//!
//! [`Color`]: ../color/trait.Color.html
//! [`Illuminant`]: ../illuminants/enum.Illuminant.html
//! [`EuclideanDistance`]: ../euclidean_distance/trait.EuclideanDistance.html

pub use color::{Color, RGBColor, XYZColor};
pub use colors::{CIELABColor, HSLColor};
pub use distance::{cie94, Cie94Mode, Cie94Params};
pub use euclidean_distance::EuclideanDistance;
pub use illuminants::Illuminant;
