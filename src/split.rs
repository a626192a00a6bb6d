//! Axis-aligned splitting hyperplanes.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::point::{overlap_epsilon, squared_sum, Point};
use crate::types::Axis;

/// An axis-aligned hyperplane that partitions space into two halves.
///
/// A split consists of a `direction`, the zero-based index of the axis the hyperplane is
/// normal to, and a `location` along that axis. Points whose component along `direction` is
/// strictly less than `location` are on the left; everything else, including points lying
/// exactly on the hyperplane, is on the right.
///
/// # Examples
///
/// ```rust
/// use aligned_partition::{Point, Split};
///
/// let split = Split::new(1, 0.0f64);
///
/// assert!(split.is_left_of(&Point::new([1.0, -1.0])));
/// assert!(!split.is_left_of(&Point::new([1.0, 0.0])));
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Split<A> {
    direction: usize,
    location: A,
}

impl<A: Axis> Split<A> {
    /// Create a new split from a given direction and location.
    #[inline]
    pub fn new(direction: usize, location: A) -> Self {
        Split {
            direction,
            location,
        }
    }

    /// Computes the split that separates two points.
    ///
    /// The split direction is the axis along which the points are furthest apart (the first
    /// such axis on ties), and the location is the midpoint of the two points along it.
    /// Returns `None` if the points overlap, as no split can separate them.
    ///
    /// ```rust
    /// use aligned_partition::{Point, Split};
    ///
    /// let split = Split::between(&Point::new([0.0f64, 0.0]), &Point::new([10.0, 0.0])).unwrap();
    ///
    /// assert_eq!(split.direction(), 0);
    /// assert_eq!(split.location(), 5.0);
    /// assert_eq!(Split::between(&Point::new([1.0f64, 1.0]), &Point::new([1.0, 1.0])), None);
    /// ```
    pub fn between<const K: usize>(a: &Point<A, K>, b: &Point<A, K>) -> Option<Self> {
        let diff = a.abs_diff(b);
        if squared_sum(&diff) < overlap_epsilon() {
            return None;
        }

        let mut direction = 0;
        for axis in 1..K {
            if diff[axis] > diff[direction] {
                direction = axis;
            }
        }

        let (lo, hi) = if a[direction] < b[direction] {
            (a[direction], b[direction])
        } else {
            (b[direction], a[direction])
        };

        // the midpoint of adjacent floats (or an overflowing sum) can round outside (lo, hi]
        let mid = lo.midpoint(hi);
        let location = if lo < mid && mid <= hi { mid } else { hi };

        Some(Split::new(direction, location))
    }

    /// Returns true if `point` lies on the left side of this split.
    #[inline]
    pub fn is_left_of<const K: usize>(&self, point: &Point<A, K>) -> bool {
        self.is_left_of_coords(point.coords())
    }

    #[inline]
    pub(crate) fn is_left_of_coords<const K: usize>(&self, coords: &[A; K]) -> bool {
        coords[self.direction] < self.location
    }

    /// Get the direction (axis index) of the split.
    #[inline]
    pub fn direction(&self) -> usize {
        self.direction
    }

    /// Get the location of the split along its direction.
    #[inline]
    pub fn location(&self) -> A {
        self.location
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case([0.0, 0.0], [10.0, 0.0], 0, 5.0)]
    #[case([0.0, 0.0], [1.0, -3.0], 1, -1.5)]
    #[case([1.0, 1.0], [3.0, 3.0], 0, 2.0)] // tie goes to the first axis
    #[case([-2.0, 4.0], [-2.0, 1.0], 1, 2.5)]
    fn splits_on_the_axis_of_greatest_separation(
        #[case] a: [f64; 2],
        #[case] b: [f64; 2],
        #[case] direction: usize,
        #[case] location: f64,
    ) {
        let split = Split::between(&Point::new(a), &Point::new(b)).unwrap();

        assert_eq!(split.direction(), direction);
        assert_eq!(split.location(), location);
    }

    #[test]
    fn between_is_symmetric() {
        let a = Point::new([0.25f64, 7.0, -1.0]);
        let b = Point::new([0.5f64, 2.0, 3.0]);

        assert_eq!(Split::between(&a, &b), Split::between(&b, &a));
    }

    #[test]
    fn overlapping_points_have_no_split() {
        let a = Point::new([1.0f64, 1.0, 1.0]);
        let b = Point::new([1.0 + 1e-13, 1.0 + 1e-13, 1.0 + 1e-13]);

        assert_eq!(Split::between(&a, &b), None);
        assert_eq!(Split::between(&a, &a), None);
    }

    #[test]
    fn location_stays_above_the_lower_point_for_adjacent_floats() {
        let lo = 1.0e12f64;
        let hi = f64::from_bits(lo.to_bits() + 1);
        let a = Point::new([lo, 0.0]);
        let b = Point::new([hi, 0.0]);

        // not overlapping, but with no float strictly between them
        let split = Split::between(&a, &b).unwrap();

        assert!(split.is_left_of(&a));
        assert!(!split.is_left_of(&b));
    }

    #[test]
    fn points_on_the_split_location_go_right() {
        let split = Split::new(0, 5.0f64);

        assert!(split.is_left_of(&Point::new([4.999, 100.0])));
        assert!(!split.is_left_of(&Point::new([5.0, -100.0])));
        assert!(!split.is_left_of(&Point::new([5.001, 0.0])));
    }

    #[test]
    fn separates_the_two_points_it_was_built_from() {
        let a = Point::new([3.0f32, 1.0]);
        let b = Point::new([-1.0f32, 2.0]);
        let split = Split::between(&a, &b).unwrap();

        assert_ne!(split.is_left_of(&a), split.is_left_of(&b));
    }
}
