//! Read-only queries against a [`PartitionTree`](crate::PartitionTree).

pub mod locate;
pub mod partition_map;
