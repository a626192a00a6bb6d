//! Axis-aligned partition tree, built incrementally from points with co-ordinates of type
//! [`f64`] or [`f32`], and its point-location queries.

pub mod cell;
mod construction;
#[doc(hidden)]
pub mod query;
pub mod tree;
