//! This module contains [`Coord`](struct.Coord.html), a plain 3D point used to unify the math that
//! is the same for every color space once a color is embedded in three dimensions: componentwise
//! arithmetic, midpoints, and Euclidean distance. Each color type that has a sensible embedding
//! implements `From<Coord>` and `Into<Coord>`, mapping its components to the axes in the order the
//! letters appear in its name (so `CIELABColor` puts `l` on x, `a` on y, and `b` on z).

use num;
use num::{Num, NumCast};
use std::ops::{Add, Div, Mul, Sub};

/// Any numeric scalar that can be cast to `f64`, described using the common numeric traits in
/// [`num`]. Anything meeting this bound can scale a [`Coord`] through multiplication or division.
pub trait Scalar: NumCast + Num {}

impl<T: NumCast + Num> Scalar for T {}

/// A point in 3D space, with the usual componentwise addition and subtraction and scalar
/// multiplication and division. The three axes carry no meaning of their own: the color type that
/// converts to a `Coord` decides what each axis holds.
///
/// # Examples
/// ```
/// # use huedelta::coord::Coord;
/// let point_1 = Coord { x: 1., y: 8., z: 7. };
/// let point_2 = Coord { x: 7., y: 2., z: 3. };
/// let sum = point_1 + point_2; // (8, 10, 10)
/// let diff = point_1 - point_2; // (-6, 6, 4)
/// // only scalar multiplication and division exist: the product of two points is ambiguous
/// let prod = point_1 * 2u8; // (2, 16, 14)
/// let quot = point_1 / 2.; // (0.5, 4, 3.5)
/// # assert_eq!(sum, Coord { x: 8., y: 10., z: 10. });
/// # assert_eq!(prod, Coord { x: 2., y: 16., z: 14. });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coord {
    /// The first axis.
    pub x: f64,
    /// The second axis.
    pub y: f64,
    /// The third axis.
    pub z: f64,
}

impl Add for Coord {
    type Output = Coord;
    fn add(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for Coord {
    type Output = Coord;
    fn sub(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl<U: Scalar> Mul<U> for Coord {
    type Output = Coord;
    fn mul(self, rhs: U) -> Coord {
        let r: f64 = num::cast(rhs).unwrap();
        Coord {
            x: self.x * r,
            y: self.y * r,
            z: self.z * r,
        }
    }
}

impl<U: Scalar> Div<U> for Coord {
    type Output = Coord;
    fn div(self, rhs: U) -> Coord {
        if rhs.is_zero() {
            panic!("Division by 0!");
        } else {
            let r: f64 = num::cast(rhs).unwrap();
            Coord {
                x: self.x / r,
                y: self.y / r,
                z: self.z / r,
            }
        }
    }
}

impl Coord {
    /// The midpoint between two 3D points, as a new `Coord`.
    /// # Example
    /// ```
    /// # use huedelta::coord::Coord;
    /// let point1 = Coord { x: 0.25, y: 0., z: 1. };
    /// let point2 = Coord { x: 0.75, y: 1., z: 1. };
    /// let mid = point1.midpoint(&point2);
    /// assert!((mid.x - 0.5).abs() <= 1e-10);
    /// assert!((mid.y - 0.5).abs() <= 1e-10);
    /// assert!((mid.z - 1.).abs() <= 1e-10);
    /// ```
    pub fn midpoint(&self, other: &Coord) -> Coord {
        Coord {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
            z: (self.z + other.z) / 2.0,
        }
    }
    /// The Euclidean distance between two 3D points: the square root of the sum of squared
    /// per-axis differences. It is tempting to read this as perceptual color difference, but for
    /// most embeddings it is not: see the warning on
    /// [`EuclideanDistance`](../euclidean_distance/trait.EuclideanDistance.html) and prefer
    /// [`Color::distance`](../color/trait.Color.html#method.distance) for anything a human will
    /// judge.
    /// # Example
    /// ```
    /// # use huedelta::coord::Coord;
    /// let point1 = Coord { x: 0., y: 0., z: -1. };
    /// let point2 = Coord { x: 2., y: 3., z: 5. };
    /// let dist = point1.euclidean_distance(&point2);
    /// assert!((dist - 7.).abs() <= 1e-10);
    /// ```
    pub fn euclidean_distance(&self, other: &Coord) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2) + (self.z - other.z).powi(2))
            .sqrt()
    }
}
