use az::{Az, Cast, CheckedAs, CheckedCast};

#[cfg(feature = "tracing")]
use tracing::{event, Level};

use crate::error::OverlapError;
use crate::partition::cell::{Cell, Leaf};
use crate::partition::tree::PartitionTree;
use crate::point::Point;
use crate::types::{Axis, Content};

impl<A: Axis, T: Content, const K: usize> Cell<A, T, K> {
    /// Adds a point to the subtree rooted at this cell.
    ///
    /// The point is routed down to the leaf whose cell contains it, and that leaf is replaced
    /// by an internal cell whose two leaf children hold the old and the new point. On success
    /// returns the depth, relative to this cell, of the two new leaves.
    ///
    /// Fails if the point overlaps the point held by that leaf. Nothing is modified in that
    /// case.
    pub fn add(&mut self, query: &[A; K], item: T) -> Result<usize, OverlapError<A, T>> {
        let point = Point::from(query);
        let mut depth = 0;
        let mut cell = self;

        loop {
            match cell {
                Cell::Internal(node) => {
                    cell = node.child_mut(query);
                    depth += 1;
                }
                Cell::Leaf(leaf) => {
                    let node = leaf.split_with(point, item)?;

                    #[cfg(feature = "tracing")]
                    event!(
                        Level::TRACE,
                        direction = node.split().direction(),
                        location = ?node.split().location(),
                        depth,
                        "split leaf"
                    );

                    *cell = Cell::Internal(node);
                    return Ok(depth + 1);
                }
            }
        }
    }
}

impl<A: Axis, T: Content, const K: usize> PartitionTree<A, T, K> {
    /// Creates a tree holding a single point.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use aligned_partition::PartitionTree;
    ///
    /// let tree: PartitionTree<f64, u32, 3> = PartitionTree::new(&[1.0, 2.0, 5.0], 100);
    ///
    /// assert_eq!(tree.size(), 1);
    /// ```
    #[inline]
    pub fn new(query: &[A; K], item: T) -> Self {
        PartitionTree {
            root: Cell::Leaf(Leaf::new(Point::from(query), item)),
            size: 1,
            depth: 0,
        }
    }

    /// Adds a point to the tree, along with an item that will be returned by queries that
    /// land in its cell.
    ///
    /// Returns an [`OverlapError`] if the point overlaps the stored point whose leaf it is
    /// routed to. The tree is unmodified in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use aligned_partition::PartitionTree;
    ///
    /// let mut tree: PartitionTree<f64, u32, 2> = PartitionTree::new(&[0.0, 0.0], 100);
    ///
    /// assert!(tree.add(&[10.0, 0.0], 101).is_ok());
    /// assert!(tree.add(&[10.0, 1e-13], 102).is_err());
    ///
    /// assert_eq!(tree.size(), 2);
    /// ```
    pub fn add(&mut self, query: &[A; K], item: T) -> Result<(), OverlapError<A, T>> {
        let depth = self.root.add(query, item).map_err(|err| {
            #[cfg(feature = "tracing")]
            event!(
                Level::DEBUG,
                item = ?err.item,
                existing = ?err.existing,
                squared_distance = ?err.squared_distance,
                "rejected overlapping point"
            );
            err
        })?;

        self.size += 1;
        self.depth = self.depth.max(depth);

        Ok(())
    }

    /// Builds a tree by adding each point of `points` in order. Each point's item is its
    /// index in `points`.
    ///
    /// Stops at, and returns, the first [`OverlapError`] encountered.
    ///
    /// # Panics
    ///
    /// If `points` is empty, or if the index of its last point does not fit in `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use aligned_partition::PartitionTree;
    ///
    /// let points = [[0.0f64, 0.0], [10.0, 0.0], [5.0, 0.0]];
    /// let tree: PartitionTree<f64, usize, 2> = PartitionTree::build(&points).unwrap();
    ///
    /// assert_eq!(tree.size(), 3);
    /// assert_eq!(tree.search(&[5.5, 0.0]).item(), 2);
    /// ```
    pub fn build(points: &[[A; K]]) -> Result<Self, OverlapError<A, T>>
    where
        usize: Cast<T> + CheckedCast<T>,
    {
        assert!(
            !points.is_empty(),
            "a partition tree needs at least one point"
        );
        assert!(
            (points.len() - 1).checked_as::<T>().is_some(),
            "{} points cannot be indexed by the item type",
            points.len()
        );

        let mut tree = PartitionTree::new(&points[0], 0usize.az::<T>());
        for (idx, query) in points.iter().enumerate().skip(1) {
            tree.add(query, idx.az::<T>())?;
        }

        #[cfg(feature = "tracing")]
        event!(
            Level::DEBUG,
            size = tree.size,
            depth = tree.depth,
            "built partition tree"
        );

        Ok(tree)
    }
}

impl<A: Axis, T: Content, const K: usize> TryFrom<&[[A; K]]> for PartitionTree<A, T, K>
where
    usize: Cast<T> + CheckedCast<T>,
{
    type Error = OverlapError<A, T>;

    fn try_from(points: &[[A; K]]) -> Result<Self, Self::Error> {
        PartitionTree::build(points)
    }
}
