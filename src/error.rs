//! Error returned when a point cannot be separated from a point already stored in the tree.

use thiserror::Error;

/// Returned by [`PartitionTree::add`](crate::PartitionTree::add) and
/// [`PartitionTree::build`](crate::PartitionTree::build) when a new point overlaps a point
/// already in the tree (their squared distance is below
/// [`OVERLAP_EPSILON`](crate::OVERLAP_EPSILON)).
///
/// The tree is left unmodified when this error is returned. It is not recoverable by
/// retrying: the input needs to be deduplicated or perturbed first.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
#[error("overlapping points: item {item:?} is within {squared_distance:?} (squared) of stored item {existing:?}")]
pub struct OverlapError<A, T> {
    /// the item whose point was rejected
    pub item: T,
    /// the item of the stored point that the rejected point overlaps
    pub existing: T,
    /// squared distance between the two points
    pub squared_distance: A,
}
