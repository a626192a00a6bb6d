//! Human-readable rendering of points, splits and whole trees.

use std::fmt::{self, Display, Formatter};

use crate::iter::Visit;
use crate::partition::cell::{Cell, Leaf};
use crate::partition::tree::PartitionTree;
use crate::point::Point;
use crate::split::Split;
use crate::types::{Axis, Content};

impl<A: Axis + Display, const K: usize> Display for Point<A, K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("Point[")?;
        for (axis, coord) in self.coords().iter().enumerate() {
            if axis > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{coord}")?;
        }
        f.write_str("]")
    }
}

impl<A: Axis + Display> Display for Split<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Split[dir: {}, loc: {}]", self.direction(), self.location())
    }
}

impl<A: Axis + Display, T: Content, const K: usize> Display for Leaf<A, T, K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Cell: {}", self.point())
    }
}

impl<A: Axis + Display, T: Content, const K: usize> Display for Cell<A, T, K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Leaf(leaf) => Display::fmt(leaf, f),
            Cell::Internal(node) => write!(f, "Cell: {}", node.split()),
        }
    }
}

/// One line per cell, in depth-first order, indented by two spaces per level.
///
/// ```rust
/// use aligned_partition::PartitionTree;
///
/// let tree: PartitionTree<f64, usize, 2> =
///     PartitionTree::build(&[[0.0, 0.0], [10.0, 0.5]]).unwrap();
///
/// assert_eq!(
///     tree.to_string(),
///     "Cell: Split[dir: 0, loc: 5]\n  Cell: Point[0, 0]\n  Cell: Point[10, 0.5]\n"
/// );
/// ```
impl<A: Axis + Display, T: Content, const K: usize> Display for PartitionTree<A, T, K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for visit in self.traverse() {
            let indent = 2 * visit.depth();
            match visit {
                Visit::Split { split, .. } => writeln!(f, "{:indent$}Cell: {split}", "")?,
                Visit::Leaf { leaf, .. } => writeln!(f, "{:indent$}{leaf}", "")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::partition::tree::PartitionTree;
    use crate::point::Point;
    use crate::split::Split;

    #[test]
    fn renders_points_and_splits() {
        assert_eq!(Point::new([1.5f64, -2.0, 0.0]).to_string(), "Point[1.5, -2, 0]");
        assert_eq!(Split::new(2, 0.25f32).to_string(), "Split[dir: 2, loc: 0.25]");
    }

    #[test]
    fn renders_cells() {
        let tree: PartitionTree<f64, u8, 1> = PartitionTree::build(&[[1.0], [3.0]]).unwrap();

        assert_eq!(tree.root().to_string(), "Cell: Split[dir: 0, loc: 2]");
        assert_eq!(tree.search(&[0.0]).to_string(), "Cell: Point[1]");
    }

    #[test]
    fn indents_by_depth() {
        let tree: PartitionTree<f64, u8, 1> =
            PartitionTree::build(&[[0.0], [10.0], [20.0]]).unwrap();

        let expected = "\
Cell: Split[dir: 0, loc: 5]
  Cell: Point[0]
  Cell: Split[dir: 0, loc: 15]
    Cell: Point[10]
    Cell: Point[20]
";
        assert_eq!(tree.to_string(), expected);
    }
}
