use std::error::Error;

use aligned_partition::test_utils::seeded_points;
use aligned_partition::{MapWindow, PartitionTree};
use tracing::{info, Level};

const DIMS: usize = 2;
const NUM_POINTS: usize = 100;
const MIN_COORD: f64 = -2.0;
const MAX_COORD: f64 = 5.0;
const SEED: u64 = 123;
const MAP_SAMPLES: usize = 60;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let points = seeded_points::<f64, DIMS>(SEED, NUM_POINTS, MIN_COORD, MAX_COORD);
    let tree: PartitionTree<f64, usize, DIMS> = PartitionTree::build(&points)?;
    info!(size = tree.size(), depth = tree.depth(), "built partition tree");

    print!("{tree}");

    // one character per sample, showing the located point's index in base 36
    let window = MapWindow::square([0.0; DIMS], MIN_COORD, MAX_COORD, MAP_SAMPLES);
    for row in tree.partition_map(&window).iter().rev() {
        let line: String = row.iter().map(|&item| glyph(item)).collect();
        println!("{line}");
    }

    Ok(())
}

fn glyph(item: usize) -> char {
    char::from_digit((item % 36) as u32, 36).unwrap_or('?')
}
