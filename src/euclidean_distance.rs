//! This file provides a blanket trait for the naive notion of color difference: treat two colors
//! as points in 3D space and measure the straight line between them. In CIELAB this is the
//! original Delta-E 1976 formula, which is serviceable; in most other embeddings it is actively
//! misleading (two HSL blacks with different hues are "far apart" despite being the same color).
//! It exists because it is sometimes the right cheap tool and because having it around makes the
//! contrast with [`Color::distance`](../color/trait.Color.html#method.distance) concrete: when a
//! human will judge the result, use that instead.

use color::Color;
use coord::Coord;

/// Euclidean distance for any color type that embeds in 3D space. Unlike CIE94 this really is a
/// *metric*: symmetric, zero only between equal points, and obeying the triangle inequality. It
/// just is not a good model of what eyes do outside CIELAB.
pub trait EuclideanDistance: Color + Into<Coord> {
    /// Gets the Euclidean distance between the two colors' embeddings: the square root of the
    /// summed squares of componentwise differences.
    fn euclidean_distance(self, other: Self) -> f64 {
        let c1: Coord = self.into();
        let c2: Coord = other.into();
        c1.euclidean_distance(&c2)
    }
}

impl<T: Color + Into<Coord>> EuclideanDistance for T {
    // nothing to do
}
