//! Tests for nearest-neighbour search.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;

fn random_cloud(rng: &mut StdRng, n: usize, grid: bool) -> Vec<DVec2> {
    (0..n)
        .map(|_| {
            if grid {
                // Integer coordinates produce many exact distance ties.
                DVec2::new(
                    rng.random_range(-4..=4) as f64,
                    rng.random_range(-4..=4) as f64,
                )
            } else {
                DVec2::new(
                    rng.random_range(-100.0..100.0),
                    rng.random_range(-100.0..100.0),
                )
            }
        })
        .collect()
}

// ============================================================================
// LinearScan
// ============================================================================

#[test]
fn test_linear_scan_empty() {
    assert!(LinearScan::new(&[]).nearest(DVec2::ZERO).is_none());
}

#[test]
fn test_linear_scan_finds_closest() {
    let points = [
        DVec2::new(0.0, 0.0),
        DVec2::new(10.0, 10.0),
        DVec2::new(5.0, 5.0),
    ];
    let n = LinearScan::new(&points)
        .nearest(DVec2::new(6.0, 5.0))
        .unwrap();
    assert_eq!(n.index, 2);
    assert_eq!(n.dist_sq, 1.0);
}

#[test]
fn test_linear_scan_tie_takes_first_in_storage_order() {
    let points = [
        DVec2::new(3.0, 0.0),
        DVec2::new(-1.0, 0.0),
        DVec2::new(1.0, 0.0),
    ];
    // Both index 1 and 2 are at distance 1 from the origin.
    let n = LinearScan::new(&points).nearest(DVec2::ZERO).unwrap();
    assert_eq!(n.index, 1);
}

#[test]
fn test_linear_scan_duplicate_points() {
    let points = [DVec2::new(1.0, 1.0); 4];
    let n = LinearScan::new(&points).nearest(DVec2::ZERO).unwrap();
    assert_eq!(n.index, 0);
}

// ============================================================================
// KdTree
// ============================================================================

#[test]
fn test_kdtree_build_empty() {
    assert!(KdTree::build(&[]).is_none());
}

#[test]
fn test_kdtree_build_single_point() {
    let tree = KdTree::build(&[DVec2::new(1.0, 2.0)]).unwrap();
    let n = tree.nearest(DVec2::new(100.0, -3.0)).unwrap();
    assert_eq!(n.index, 0);
    assert_eq!(n.dist_sq, 99.0 * 99.0 + 5.0 * 5.0);
}

#[test]
fn test_kdtree_finds_exact_point() {
    let points = vec![
        DVec2::new(0.0, 0.0),
        DVec2::new(10.0, 10.0),
        DVec2::new(5.0, 5.0),
    ];
    let tree = KdTree::build(&points).unwrap();
    let n = tree.nearest(DVec2::new(5.0, 5.0)).unwrap();
    assert_eq!(n.index, 2);
    assert_eq!(n.dist_sq, 0.0);
}

#[test]
fn test_kdtree_tie_takes_lowest_index() {
    // Four points on a circle around the origin; the tree's median ordering
    // differs from storage order, the answer must not.
    let points = vec![
        DVec2::new(0.0, 2.0),
        DVec2::new(2.0, 0.0),
        DVec2::new(0.0, -2.0),
        DVec2::new(-2.0, 0.0),
    ];
    let tree = KdTree::build(&points).unwrap();
    let n = tree.nearest(DVec2::ZERO).unwrap();
    assert_eq!(n.index, 0);
    assert_eq!(n.dist_sq, 4.0);
}

#[test]
fn test_kdtree_tie_across_split_plane() {
    // Query sits exactly on the split between two equidistant points.
    let points = vec![
        DVec2::new(5.0, 0.0),
        DVec2::new(1.0, 0.0),
        DVec2::new(3.0, 10.0),
    ];
    let tree = KdTree::build(&points).unwrap();
    let n = tree.nearest(DVec2::new(3.0, 0.0)).unwrap();
    assert_eq!(n.index, 0);
}

#[test]
fn test_kdtree_matches_linear_scan_on_random_clouds() {
    let mut rng = StdRng::seed_from_u64(42);

    for round in 0..40 {
        let grid = round % 2 == 0;
        let n = rng.random_range(1..120);
        let points = random_cloud(&mut rng, n, grid);
        let queries = random_cloud(&mut rng, 50, grid);

        let tree = KdTree::build(&points).unwrap();
        let scan = LinearScan::new(&points);

        for q in queries {
            let expected = scan.nearest(q).unwrap();
            let actual = tree.nearest(q).unwrap();
            assert_eq!(actual, expected, "round {round}, query {q}");
        }
    }
}
