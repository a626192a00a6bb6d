#![cfg(feature = "serde")]

use aligned_partition::test_utils::seeded_points;
use aligned_partition::PartitionTree;

#[test]
fn tree_survives_a_json_round_trip() {
    let points = seeded_points::<f64, 3>(7, 200, -5.0, 5.0);
    let tree: PartitionTree<f64, u32, 3> = PartitionTree::build(&points).unwrap();

    let json = serde_json::to_string(&tree).unwrap();
    let restored: PartitionTree<f64, u32, 3> = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, tree);
    assert_eq!(restored.iter().collect::<Vec<_>>(), tree.iter().collect::<Vec<_>>());
    for point in &points {
        assert_eq!(restored.search(point), tree.search(point));
    }
}

#[test]
fn restored_tree_keeps_growing_the_same_way() {
    let points = seeded_points::<f32, 2>(8, 100, 0.0, 1.0);
    let (first, rest) = points.split_at(60);
    let mut tree: PartitionTree<f32, u32, 2> = PartitionTree::build(first).unwrap();

    let json = serde_json::to_string(&tree).unwrap();
    let mut restored: PartitionTree<f32, u32, 2> = serde_json::from_str(&json).unwrap();

    for (idx, point) in rest.iter().enumerate() {
        let item = (first.len() + idx) as u32;
        tree.add(point, item).unwrap();
        restored.add(point, item).unwrap();
    }

    assert_eq!(restored, tree);
}

#[test]
fn truncated_coordinates_are_rejected() {
    let tree: PartitionTree<f64, u32, 2> = PartitionTree::new(&[1.0, 2.0], 0);
    let json = serde_json::to_string(&tree).unwrap();
    let truncated = json.replace("[1.0,2.0]", "[1.0]");

    assert_ne!(json, truncated);
    assert!(serde_json::from_str::<PartitionTree<f64, u32, 2>>(&truncated).is_err());
}
