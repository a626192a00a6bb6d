//! The nodes of a [`PartitionTree`](crate::PartitionTree).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::OverlapError;
use crate::point::Point;
use crate::split::Split;
use crate::types::{Axis, Content};

/// A leaf cell in a partition tree.
///
/// Every point stored in the tree is represented by exactly one leaf, which also carries the
/// item that was added alongside it.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "A: Serialize, T: Serialize",
        deserialize = "A: Deserialize<'de> + Copy + Default, T: Deserialize<'de>"
    ))
)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Leaf<A, T, const K: usize> {
    point: Point<A, K>,
    item: T,
}

impl<A: Axis, T: Content, const K: usize> Leaf<A, T, K> {
    /// Create a new leaf holding `point` and its `item`.
    #[inline]
    pub fn new(point: Point<A, K>, item: T) -> Self {
        Leaf { point, item }
    }

    /// Returns the point represented by this leaf.
    #[inline]
    pub fn point(&self) -> &Point<A, K> {
        &self.point
    }

    /// Returns the item stored alongside this leaf's point.
    #[inline]
    pub fn item(&self) -> T {
        self.item
    }

    /// Splits this leaf so that it can accommodate `point`.
    ///
    /// Returns the internal cell that should replace this leaf: its split separates the two
    /// points, and each of its children is a leaf holding one of them. `self` is left
    /// untouched, so on error the tree is unchanged.
    pub(crate) fn split_with(
        &self,
        point: Point<A, K>,
        item: T,
    ) -> Result<Internal<A, T, K>, OverlapError<A, T>> {
        let split = Split::between(&point, &self.point).ok_or_else(|| OverlapError {
            item,
            existing: self.item,
            squared_distance: point.squared_distance(&self.point),
        })?;

        let incoming = Leaf::new(point, item);
        let (left, right) = if split.is_left_of(&point) {
            (incoming, *self)
        } else {
            (*self, incoming)
        };

        Ok(Internal::new(split, Cell::Leaf(left), Cell::Leaf(right)))
    }
}

/// An internal cell in a partition tree.
///
/// Internal cells own a [`Split`] and exactly two children. Every point under the left child
/// lies strictly below the split location along the split direction; every point under the
/// right child lies at or above it.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "A: Serialize, T: Serialize",
        deserialize = "A: Deserialize<'de> + Copy + Default, T: Deserialize<'de>"
    ))
)]
#[derive(Clone, Debug, PartialEq)]
pub struct Internal<A, T, const K: usize> {
    pub(crate) split: Split<A>,
    pub(crate) left: Box<Cell<A, T, K>>,
    pub(crate) right: Box<Cell<A, T, K>>,
}

impl<A: Axis, T: Content, const K: usize> Internal<A, T, K> {
    pub(crate) fn new(split: Split<A>, left: Cell<A, T, K>, right: Cell<A, T, K>) -> Self {
        Internal {
            split,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Returns this cell's split.
    #[inline]
    pub fn split(&self) -> &Split<A> {
        &self.split
    }

    /// Returns the left child.
    #[inline]
    pub fn left(&self) -> &Cell<A, T, K> {
        &self.left
    }

    /// Returns the right child.
    #[inline]
    pub fn right(&self) -> &Cell<A, T, K> {
        &self.right
    }

    /// Returns the child on whose side of the split `coords` lie.
    #[inline]
    pub(crate) fn child(&self, coords: &[A; K]) -> &Cell<A, T, K> {
        if self.split.is_left_of_coords(coords) {
            &self.left
        } else {
            &self.right
        }
    }

    #[inline]
    pub(crate) fn child_mut(&mut self, coords: &[A; K]) -> &mut Cell<A, T, K> {
        if self.split.is_left_of_coords(coords) {
            &mut self.left
        } else {
            &mut self.right
        }
    }
}

/// A cell of a partition tree: either a [`Leaf`] or an [`Internal`] cell.
///
/// A cell starts out as a leaf and turns into an internal cell exactly once, when a second
/// point is routed to it. It never turns back.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "A: Serialize, T: Serialize",
        deserialize = "A: Deserialize<'de> + Copy + Default, T: Deserialize<'de>"
    ))
)]
#[derive(Clone, Debug, PartialEq)]
pub enum Cell<A, T, const K: usize> {
    /// a cell holding a single point
    Leaf(Leaf<A, T, K>),
    /// a cell holding a split and two children
    Internal(Internal<A, T, K>),
}

impl<A: Axis, T: Content, const K: usize> Cell<A, T, K> {
    /// Returns the leaf represented by this cell, if it is one.
    #[inline]
    pub fn as_leaf(&self) -> Option<&Leaf<A, T, K>> {
        match self {
            Cell::Leaf(leaf) => Some(leaf),
            Cell::Internal(_) => None,
        }
    }

    /// Returns the split of this cell, if it is an internal cell.
    #[inline]
    pub fn split(&self) -> Option<&Split<A>> {
        match self {
            Cell::Leaf(_) => None,
            Cell::Internal(node) => Some(node.split()),
        }
    }

    /// Returns true if this cell is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Cell::Leaf(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splitting_a_leaf_puts_the_lower_point_on_the_left() {
        let leaf = Leaf::new(Point::new([10.0f64, 0.0]), 1u32);

        let node = leaf.split_with(Point::new([0.0, 0.0]), 2).unwrap();

        assert_eq!(node.split(), &Split::new(0, 5.0));
        assert_eq!(node.left().as_leaf().map(Leaf::item), Some(2));
        assert_eq!(node.right().as_leaf().map(Leaf::item), Some(1));
    }

    #[test]
    fn splitting_a_leaf_keeps_the_original_point_on_the_left_when_lower() {
        let leaf = Leaf::new(Point::new([0.0f64, 0.0]), 1u32);

        let node = leaf.split_with(Point::new([0.0, 8.0]), 2).unwrap();

        assert_eq!(node.split(), &Split::new(1, 4.0));
        assert_eq!(node.left().as_leaf().map(Leaf::item), Some(1));
        assert_eq!(node.right().as_leaf().map(Leaf::item), Some(2));
    }

    #[test]
    fn splitting_a_leaf_with_an_overlapping_point_fails() {
        let leaf = Leaf::new(Point::new([1.0f64, 2.0]), 5u32);

        let err = leaf
            .split_with(Point::new([1.0 + 1e-13, 2.0 - 1e-13]), 6)
            .unwrap_err();

        assert_eq!(err.item, 6);
        assert_eq!(err.existing, 5);
        assert!(err.squared_distance < 1e-12);
        assert_eq!(leaf, Leaf::new(Point::new([1.0, 2.0]), 5));
    }

    #[test]
    fn child_routes_by_strict_comparison() {
        let node: Internal<f64, u32, 2> = Internal::new(
            Split::new(0, 5.0),
            Cell::Leaf(Leaf::new(Point::new([0.0, 0.0]), 0)),
            Cell::Leaf(Leaf::new(Point::new([10.0, 0.0]), 1)),
        );

        assert_eq!(node.child(&[4.0, 4.0]).as_leaf().map(Leaf::item), Some(0));
        assert_eq!(node.child(&[5.0, 0.0]).as_leaf().map(Leaf::item), Some(1));
        assert!(node.left().is_leaf());
        assert_eq!(node.right().split(), None);
    }
}
