//! Axis-aligned partition tree, for locating which stored point's cell contains a query
//! location. f64 or f32 are supported as co-ordinate types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::partition::cell::Cell;
use crate::types::{Axis, Content};

/// Axis-aligned binary space-partitioning tree.
///
/// The tree is grown one point at a time. Each new point is routed down to the leaf whose
/// cell contains it, and that leaf is split halfway between the two points along the axis on
/// which they are furthest apart. The shape of the tree therefore depends only on insertion
/// order; it is never rebalanced, and it is not a nearest-neighbour structure.
///
/// A tree always holds at least one point, so there is no empty tree. Use
/// [`PartitionTree::new`] to start from a single point or [`PartitionTree::build`] to create
/// one from a slice of points.
///
/// # Examples
///
/// ```rust
/// use aligned_partition::PartitionTree;
///
/// let mut tree: PartitionTree<f64, u32, 2> = PartitionTree::new(&[0.0, 0.0], 100);
/// tree.add(&[10.0, 0.0], 101)?;
///
/// assert_eq!(tree.size(), 2);
/// assert_eq!(tree.search(&[4.0, 4.0]).item(), 100);
/// assert_eq!(tree.search(&[6.0, -3.0]).item(), 101);
/// # Ok::<(), aligned_partition::OverlapError<f64, u32>>(())
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "A: Serialize, T: Serialize",
        deserialize = "A: Deserialize<'de> + Copy + Default, T: Deserialize<'de>"
    ))
)]
#[derive(Clone, Debug, PartialEq)]
pub struct PartitionTree<A, T, const K: usize> {
    pub(crate) root: Cell<A, T, K>,
    pub(crate) size: usize,
    pub(crate) depth: usize,
}

impl<A: Axis, T: Content, const K: usize> PartitionTree<A, T, K> {
    /// Returns the root cell of the tree.
    #[inline]
    pub fn root(&self) -> &Cell<A, T, K> {
        &self.root
    }

    /// Returns the number of points stored in the tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use aligned_partition::PartitionTree;
    ///
    /// let mut tree: PartitionTree<f64, u32, 3> = PartitionTree::new(&[1.0, 2.0, 5.0], 100);
    /// tree.add(&[1.1, 2.1, 5.1], 101).unwrap();
    ///
    /// assert_eq!(tree.size(), 2);
    /// ```
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the depth of the deepest leaf. A tree holding a single point has depth 0.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }
}

#[cfg(test)]
mod tests {
    use crate::partition::tree::PartitionTree;

    type AX = f64;

    #[test]
    fn it_can_be_constructed_from_a_single_point() {
        let tree: PartitionTree<AX, u32, 4> = PartitionTree::new(&[0.1, 0.2, 0.3, 0.4], 7);

        assert_eq!(tree.size(), 1);
        assert_eq!(tree.depth(), 0);
        assert!(tree.root().is_leaf());
    }

    #[test]
    fn depth_tracks_the_deepest_leaf() {
        let mut tree: PartitionTree<AX, u32, 1> = PartitionTree::new(&[0.0], 0);

        // each point lands beyond all previous ones, producing a chain
        for i in 1..10u32 {
            tree.add(&[i as AX], i).unwrap();
            assert_eq!(tree.depth(), i as usize);
        }

        assert_eq!(tree.size(), 10);
    }
}
