#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(rustdoc::invalid_codeblock_attributes)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::private_intra_doc_links)]

//! # aligned-partition
//!
//! An incremental, axis-aligned binary space-partitioning tree, and point-location queries
//! against it: "which stored point's partition cell contains this location?".
//!
//! Points are added one at a time. Each new point is routed down the tree to the leaf whose
//! cell contains it, and that leaf is split into two, halfway between the old and the new
//! point, along the axis on which they are furthest apart. Searching performs the same
//! routing without modifying anything, and returns the leaf it ends up in.
//!
//! The resulting partition depends on insertion order and is never rebalanced. It is a fast,
//! approximate locality structure: the located point is often, but not always, the nearest
//! stored point.
//!
//! ## Usage
//! ```rust
//! use aligned_partition::{PartitionTree, Split};
//!
//! let points = [[0.0f64, 0.0], [10.0, 0.0], [5.0, 0.0]];
//!
//! let mut tree: PartitionTree<f64, usize, 2> = PartitionTree::build(&points)?;
//! assert_eq!(tree.root().split(), Some(&Split::new(0, 5.0)));
//!
//! assert_eq!(tree.search(&[4.0, 4.0]).item(), 0);
//! assert_eq!(tree.search(&[6.0, -3.0]).item(), 2);
//! assert_eq!(tree.search(&[9.0, 1.0]).item(), 1);
//!
//! // points too close to a stored point are rejected, leaving the tree as it was
//! assert!(tree.add(&[10.0, 1e-13], 3).is_err());
//! assert_eq!(tree.size(), 3);
//! # Ok::<(), aligned_partition::OverlapError<f64, usize>>(())
//! ```
//!
//! ## Cargo features
//!
//! - `tracing` (default): emits [`tracing`](https://docs.rs/tracing) events as leaves are split
//!   and points are rejected
//! - `serde`: `Serialize` / `Deserialize` for the tree and its parts
//!   (exact round trips through `serde_json` need its `float_roundtrip` feature)
//! - `rayon`: computes [`PartitionTree::partition_map`] rows in parallel
//! - `test_utils`: seeded random point generators

#[cfg(feature = "serde")]
mod custom_serde;
mod display;
pub mod error;
pub mod iter;
pub mod partition;
pub mod point;
pub mod split;
#[doc(hidden)]
#[cfg(feature = "test_utils")]
pub mod test_utils;
pub mod types;

pub use crate::error::OverlapError;
pub use crate::iter::Visit;
pub use crate::partition::cell::{Cell, Internal, Leaf};
pub use crate::partition::query::partition_map::MapWindow;
pub use crate::partition::tree::PartitionTree;
pub use crate::point::{Point, OVERLAP_EPSILON};
pub use crate::split::Split;
