//! Sampling a 2D slice through the partition onto a grid of located items.

use az::{Az, Cast};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::partition::tree::PartitionTree;
use crate::types::{Axis, Content};

/// A regular two-dimensional grid of query locations over which a
/// [`partition_map`](PartitionTree::partition_map) is evaluated.
///
/// The grid spans two of the tree's axes. Every other co-ordinate of each query location is
/// taken from `base`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapWindow<A, const K: usize> {
    /// co-ordinates used for the axes that are not mapped
    pub base: [A; K],
    /// the axes varied along columns and along rows, respectively
    pub axes: [usize; 2],
    /// first sample location along each mapped axis
    pub lower: [A; 2],
    /// last sample location along each mapped axis
    pub upper: [A; 2],
    /// number of samples along each mapped axis
    pub samples: [usize; 2],
}

impl<A: Axis, const K: usize> MapWindow<A, K> {
    /// A window over axes 0 and 1 with the same bounds and number of samples along both.
    pub fn square(base: [A; K], lower: A, upper: A, samples: usize) -> Self {
        MapWindow {
            base,
            axes: [0, 1],
            lower: [lower, lower],
            upper: [upper, upper],
            samples: [samples, samples],
        }
    }

    /// Evenly spaced sample locations along the `dim`th mapped axis, first and last included.
    fn linspace(&self, dim: usize) -> Vec<A>
    where
        usize: Cast<A>,
    {
        let (lower, upper, samples) = (self.lower[dim], self.upper[dim], self.samples[dim]);
        if samples == 1 {
            return vec![lower];
        }

        let step = (upper - lower) / (samples - 1).az::<A>();
        let mut values: Vec<A> = (0..samples).map(|i| lower + i.az::<A>() * step).collect();
        values[samples - 1] = upper;
        values
    }
}

impl<A: Axis, T: Content, const K: usize> PartitionTree<A, T, K>
where
    usize: Cast<A>,
{
    /// Evaluates, at every location of a regular grid, the item of the leaf whose cell
    /// contains it.
    ///
    /// Row `r` of the result holds the `r`th sample along `window.axes[1]`; column `c` holds
    /// the `c`th sample along `window.axes[0]`. This is the data behind a picture of the
    /// partition, with one colour per stored point.
    ///
    /// # Panics
    ///
    /// If either mapped axis is not less than `K`, both mapped axes are the same, or either
    /// sample count is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use aligned_partition::{MapWindow, PartitionTree};
    ///
    /// let tree: PartitionTree<f64, usize, 2> =
    ///     PartitionTree::build(&[[0.0, 0.0], [10.0, 0.0]]).unwrap();
    ///
    /// let map = tree.partition_map(&MapWindow::square([0.0, 0.0], 0.0, 10.0, 3));
    ///
    /// assert_eq!(map, vec![vec![0, 1, 1]; 3]);
    /// ```
    pub fn partition_map(&self, window: &MapWindow<A, K>) -> Vec<Vec<T>> {
        let [col_axis, row_axis] = window.axes;
        assert!(
            col_axis < K && row_axis < K,
            "mapped axes {:?} out of range for {}-dimensional points",
            window.axes,
            K
        );
        assert_ne!(col_axis, row_axis, "a partition map needs two distinct axes");
        assert!(
            window.samples.iter().all(|&s| s > 0),
            "a partition map needs at least one sample along each axis"
        );

        let cols = window.linspace(0);
        let rows = window.linspace(1);

        let map_row = |y: &A| -> Vec<T> {
            cols.iter()
                .map(|x| {
                    let mut query = window.base;
                    query[row_axis] = *y;
                    query[col_axis] = *x;
                    self.search(&query).item()
                })
                .collect()
        };

        #[cfg(feature = "rayon")]
        let map = rows.par_iter().map(map_row).collect();
        #[cfg(not(feature = "rayon"))]
        let map = rows.iter().map(map_row).collect();

        map
    }
}
