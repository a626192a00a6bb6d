//! Immutable K-dimensional points, and the overlap test applied when two of them meet in a leaf.

use num_traits::NumCast;
use std::array;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::Axis;

/// Sum-of-squared-differences below which two points are considered to overlap.
///
/// Overlapping points cannot be separated by a midpoint split, so inserting a point that
/// overlaps one already stored in the tree is rejected with an
/// [`OverlapError`](crate::OverlapError).
pub const OVERLAP_EPSILON: f64 = 1e-12;

#[inline]
pub(crate) fn overlap_epsilon<A: Axis>() -> A {
    <A as NumCast>::from(OVERLAP_EPSILON).unwrap_or_else(A::min_positive_value)
}

/// A point in K-dimensional space.
///
/// Points are immutable once created. Two points that are nearly identical are never treated
/// as equal by the tree; see [`Point::overlaps`].
///
/// # Examples
///
/// ```rust
/// use aligned_partition::Point;
///
/// let a = Point::new([0.0f64, 0.0]);
/// let b = Point::from([3.0f64, -4.0]);
///
/// assert_eq!(b[1], -4.0);
/// assert_eq!(a.abs_diff(&b), [3.0, 4.0]);
/// assert_eq!(a.squared_distance(&b), 25.0);
/// assert!(!a.overlaps(&b));
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "A: Serialize",
        deserialize = "A: Deserialize<'de> + Copy + Default"
    ))
)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point<A, const K: usize> {
    #[cfg_attr(feature = "serde", serde(with = "crate::custom_serde::array"))]
    coords: [A; K],
}

impl<A: Axis, const K: usize> Point<A, K> {
    /// Creates a point from its co-ordinates.
    #[inline]
    pub fn new(coords: [A; K]) -> Self {
        Point { coords }
    }

    /// Returns the co-ordinates of this point.
    #[inline]
    pub fn coords(&self) -> &[A; K] {
        &self.coords
    }

    /// Returns the dimensionality of this point, `K`.
    #[inline]
    pub fn dimensions(&self) -> usize {
        K
    }

    /// Returns the per-axis absolute difference between this point and `other`.
    #[inline]
    pub fn abs_diff(&self, other: &Self) -> [A; K] {
        array::from_fn(|axis| self.coords[axis].abs_dist(other.coords[axis]))
    }

    /// Returns the sum of the squared per-axis differences between this point and `other`.
    #[inline]
    pub fn squared_distance(&self, other: &Self) -> A {
        squared_sum(&self.abs_diff(other))
    }

    /// Returns true if this point and `other` are closer than [`OVERLAP_EPSILON`]
    /// (as a sum of squared differences).
    ///
    /// ```rust
    /// use aligned_partition::Point;
    ///
    /// let a = Point::new([1.0f64, 1.0]);
    /// let b = Point::new([1.0 + 1e-13, 1.0 - 1e-13]);
    ///
    /// assert!(a.overlaps(&b));
    /// assert_ne!(a, b);
    /// ```
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.squared_distance(other) < overlap_epsilon()
    }
}

#[inline]
pub(crate) fn squared_sum<A: Axis, const K: usize>(diff: &[A; K]) -> A {
    diff.iter().fold(A::zero(), |acc, &d| acc + d * d)
}

impl<A, const K: usize> Index<usize> for Point<A, K> {
    type Output = A;

    #[inline]
    fn index(&self, axis: usize) -> &A {
        &self.coords[axis]
    }
}

impl<A: Axis, const K: usize> From<[A; K]> for Point<A, K> {
    fn from(coords: [A; K]) -> Self {
        Point::new(coords)
    }
}

impl<A: Axis, const K: usize> From<&[A; K]> for Point<A, K> {
    fn from(coords: &[A; K]) -> Self {
        Point::new(*coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn exposes_coordinates_by_axis() {
        let p = Point::new([1.0f64, -2.0, 3.5]);

        assert_eq!(p.dimensions(), 3);
        assert_eq!(p[0], 1.0);
        assert_eq!(p[1], -2.0);
        assert_eq!(p[2], 3.5);
        assert_eq!(p.coords(), &[1.0, -2.0, 3.5]);
    }

    #[test]
    fn abs_diff_is_element_wise() {
        let a = Point::new([1.0f64, 5.0, -2.0]);
        let b = Point::new([4.0f64, 1.0, -2.0]);

        assert_eq!(a.abs_diff(&b), [3.0, 4.0, 0.0]);
        assert_eq!(b.abs_diff(&a), [3.0, 4.0, 0.0]);
    }

    #[rstest]
    #[case([0.0, 0.0], [1e-13, 1e-13], true)]
    #[case([0.0, 0.0], [0.0, 0.0], true)]
    #[case([2.0, 2.0], [2.0, 2.0 + 9e-7], true)]
    #[case([0.0, 0.0], [1e-6, 1e-6], false)]
    #[case([0.0, 0.0], [10.0, 0.0], false)]
    fn overlap_uses_squared_distance(
        #[case] a: [f64; 2],
        #[case] b: [f64; 2],
        #[case] expected: bool,
    ) {
        assert_eq!(Point::new(a).overlaps(&Point::new(b)), expected);
    }

    #[test]
    fn overlap_works_for_f32() {
        let a = Point::new([0.5f32, 0.5]);

        assert!(a.overlaps(&Point::new([0.5f32, 0.5])));
        assert!(!a.overlaps(&Point::new([0.5f32, 0.5001])));
    }
}
