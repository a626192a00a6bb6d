//! Depth-first traversal of a [`PartitionTree`].

use crate::partition::cell::{Cell, Leaf};
use crate::partition::tree::PartitionTree;
use crate::split::Split;
use crate::types::{Axis, Content};

/// A cell visited during a depth-first traversal, along with its depth (the root is at 0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Visit<'a, A, T, const K: usize> {
    /// an internal cell, represented by its split
    Split {
        /// the split of the visited cell
        split: &'a Split<A>,
        /// depth of the visited cell
        depth: usize,
    },
    /// a leaf cell
    Leaf {
        /// the visited leaf
        leaf: &'a Leaf<A, T, K>,
        /// depth of the visited cell
        depth: usize,
    },
}

impl<A, T, const K: usize> Visit<'_, A, T, K> {
    /// Returns the depth of the visited cell.
    pub fn depth(&self) -> usize {
        match self {
            Visit::Split { depth, .. } | Visit::Leaf { depth, .. } => *depth,
        }
    }
}

/// Pre-order, left-before-right iterator over the cells of a tree.
///
/// Returned by [`PartitionTree::traverse`].
#[derive(Debug)]
pub struct Traverse<'a, A, T, const K: usize> {
    stack: Vec<(&'a Cell<A, T, K>, usize)>,
}

impl<'a, A, T, const K: usize> Traverse<'a, A, T, K> {
    pub(crate) fn new(root: &'a Cell<A, T, K>) -> Self {
        Self {
            stack: vec![(root, 0)],
        }
    }
}

impl<'a, A, T, const K: usize> Iterator for Traverse<'a, A, T, K> {
    type Item = Visit<'a, A, T, K>;

    fn next(&mut self) -> Option<Self::Item> {
        let (cell, depth) = self.stack.pop()?;

        Some(match cell {
            Cell::Leaf(leaf) => Visit::Leaf { leaf, depth },
            Cell::Internal(node) => {
                self.stack.push((&*node.right, depth + 1));
                self.stack.push((&*node.left, depth + 1));
                Visit::Split {
                    split: &node.split,
                    depth,
                }
            }
        })
    }
}

impl<A: Axis, T: Content, const K: usize> PartitionTree<A, T, K> {
    /// Visits every cell of the tree depth-first, each internal cell before its children and
    /// left children before right ones.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use aligned_partition::{PartitionTree, Visit};
    ///
    /// let tree: PartitionTree<f64, usize, 2> =
    ///     PartitionTree::build(&[[0.0, 0.0], [10.0, 0.0]]).unwrap();
    ///
    /// let visits: Vec<_> = tree.traverse().collect();
    ///
    /// assert_eq!(visits.len(), 3);
    /// assert!(matches!(visits[0], Visit::Split { depth: 0, .. }));
    /// assert!(matches!(visits[1], Visit::Leaf { leaf, depth: 1 } if leaf.item() == 0));
    /// assert!(matches!(visits[2], Visit::Leaf { leaf, depth: 1 } if leaf.item() == 1));
    /// ```
    pub fn traverse(&self) -> Traverse<'_, A, T, K> {
        Traverse::new(&self.root)
    }

    /// Iterate over all `(item, point)` tuples, in traversal order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use aligned_partition::PartitionTree;
    ///
    /// let tree: PartitionTree<f64, usize, 2> =
    ///     PartitionTree::build(&[[10.0, 0.0], [0.0, 0.0]]).unwrap();
    ///
    /// let pairs: Vec<_> = tree.iter().collect();
    /// assert_eq!(pairs, vec![(1, [0.0, 0.0]), (0, [10.0, 0.0])]);
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = (T, [A; K])> + '_ {
        self.traverse().filter_map(|visit| match visit {
            Visit::Leaf { leaf, .. } => Some((leaf.item(), *leaf.point().coords())),
            Visit::Split { .. } => None,
        })
    }
}
