//! Definitions of the traits that coordinate and item types must satisfy to be stored in a
//! [`PartitionTree`](crate::PartitionTree)
use num_traits::float::FloatCore;
use std::fmt::Debug;

/// Axis trait represents the traits that must be implemented
/// by the type that is used as the first generic parameter, `A`,
/// on [`PartitionTree`](crate::PartitionTree). This will be [`f64`] or [`f32`].
pub trait Axis: FloatCore + Default + Debug + Copy + Sync + Send {
    /// returns absolute diff between two values of a type implementing this trait
    fn abs_dist(self, other: Self) -> Self;

    /// returns the midpoint between two values of a type implementing this trait
    fn midpoint(self, other: Self) -> Self;
}

impl<T: FloatCore + Default + Debug + Copy + Sync + Send> Axis for T {
    #[inline]
    fn abs_dist(self, other: Self) -> Self {
        (self - other).abs()
    }

    #[inline]
    fn midpoint(self, other: Self) -> Self {
        (self + other) / (T::one() + T::one())
    }
}

/// Content trait.
///
/// Must be implemented by any type that you want to use to represent the content
/// stored alongside each point in a [`PartitionTree`](crate::PartitionTree). Generally this
/// will be `usize` or `u32`: [`PartitionTree::build`](crate::PartitionTree::build) stores the
/// index of each point in the input slice, so query results can index straight back into it.
/// However, any type that satisfies these trait constraints may be used.
pub trait Content: PartialEq + Default + Clone + Copy + Ord + Debug + Sync + Send {}
impl<T: PartialEq + Default + Clone + Copy + Ord + Debug + Sync + Send> Content for T {}
