//! Point location: routing a query down to the leaf whose cell contains it.

use crate::partition::cell::{Cell, Leaf};
use crate::partition::tree::PartitionTree;
use crate::types::{Axis, Content};

impl<A: Axis, T: Content, const K: usize> Cell<A, T, K> {
    /// Returns the leaf, under this cell, whose partition cell contains `query`.
    ///
    /// At each internal cell the query goes left if its co-ordinate along the split direction
    /// is strictly less than the split location, and right otherwise.
    #[inline]
    pub fn search(&self, query: &[A; K]) -> &Leaf<A, T, K> {
        self.search_with_depth(query).0
    }

    fn search_with_depth(&self, query: &[A; K]) -> (&Leaf<A, T, K>, usize) {
        let mut cell = self;
        let mut depth = 0;

        loop {
            match cell {
                Cell::Internal(node) => {
                    cell = node.child(query);
                    depth += 1;
                }
                Cell::Leaf(leaf) => return (leaf, depth),
            }
        }
    }
}

impl<A: Axis, T: Content, const K: usize> PartitionTree<A, T, K> {
    /// Queries the tree to find the leaf whose partition cell contains `query`.
    ///
    /// The leaf's point is the stored point that lies on the same side as `query` of every
    /// split between the root and that leaf. It is often close to `query`, but it is not
    /// guaranteed to be the nearest stored point.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use aligned_partition::PartitionTree;
    ///
    /// let tree: PartitionTree<f64, usize, 2> =
    ///     PartitionTree::build(&[[0.0, 0.0], [10.0, 0.0]]).unwrap();
    ///
    /// let leaf = tree.search(&[4.0, 4.0]);
    /// assert_eq!(leaf.item(), 0);
    /// assert_eq!(leaf.point().coords(), &[0.0, 0.0]);
    ///
    /// assert_eq!(tree.search(&[6.0, -3.0]).item(), 1);
    /// ```
    #[inline]
    pub fn search(&self, query: &[A; K]) -> &Leaf<A, T, K> {
        self.root.search(query)
    }

    /// Returns the depth of the leaf that [`search`](PartitionTree::search) reaches for
    /// `query`.
    ///
    /// ```rust
    /// use aligned_partition::PartitionTree;
    ///
    /// let tree: PartitionTree<f64, usize, 1> =
    ///     PartitionTree::build(&[[0.0], [10.0], [20.0]]).unwrap();
    ///
    /// assert_eq!(tree.leaf_depth(&[-1.0]), 1);
    /// assert_eq!(tree.leaf_depth(&[19.0]), 2);
    /// ```
    #[inline]
    pub fn leaf_depth(&self, query: &[A; K]) -> usize {
        self.root.search_with_depth(query).1
    }
}
