//! Nearest-neighbour search over 2D positions.
//!
//! Both searches return the *first* position in storage order among those at
//! the minimum squared distance, so they are interchangeable: a k-d tree gives
//! the same answer as a linear scan, only faster on large clouds.

use glam::DVec2;

#[cfg(test)]
mod tests;

/// Result of a nearest-neighbour query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// Position of the neighbour in the searched slice.
    pub index: usize,
    pub dist_sq: f64,
}

impl Neighbor {
    const NONE: Neighbor = Neighbor {
        index: usize::MAX,
        dist_sq: f64::INFINITY,
    };

    /// Whether a candidate at `index` with `dist_sq` beats `self`.
    #[inline]
    fn is_beaten_by(&self, index: usize, dist_sq: f64) -> bool {
        dist_sq < self.dist_sq || (dist_sq == self.dist_sq && index < self.index)
    }
}

pub trait NearestSearch {
    /// Finds the closest stored position to `query`, or `None` when empty.
    fn nearest(&self, query: DVec2) -> Option<Neighbor>;
}

/// Squared Euclidean distance. Shared by every search so distances compare
/// bit-for-bit.
#[inline]
pub fn distance_squared(a: DVec2, b: DVec2) -> f64 {
    (a - b).length_squared()
}

/// Brute-force search over a slice of positions.
#[derive(Debug, Clone, Copy)]
pub struct LinearScan<'a> {
    points: &'a [DVec2],
}

impl<'a> LinearScan<'a> {
    pub fn new(points: &'a [DVec2]) -> Self {
        Self { points }
    }
}

impl NearestSearch for LinearScan<'_> {
    fn nearest(&self, query: DVec2) -> Option<Neighbor> {
        let mut best = Neighbor::NONE;
        for (index, &point) in self.points.iter().enumerate() {
            let dist_sq = distance_squared(query, point);
            // Strict comparison keeps the earliest minimum.
            if dist_sq < best.dist_sq {
                best = Neighbor { index, dist_sq };
            }
        }

        (best.index != usize::MAX).then_some(best)
    }
}

/// A 2D k-d tree, built once and queried many times.
#[derive(Debug)]
pub struct KdTree {
    nodes: Vec<KdNode>,
    points: Vec<DVec2>,
}

#[derive(Debug, Clone)]
struct KdNode {
    /// Index into the points array
    point_idx: usize,
    left: Option<usize>,
    right: Option<usize>,
    /// Split dimension (0 = x, 1 = y)
    split_dim: usize,
}

impl KdTree {
    /// Builds a median-split tree. Returns `None` if `points` is empty.
    pub fn build(points: &[DVec2]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let points = points.to_vec();
        let mut indices: Vec<usize> = (0..points.len()).collect();
        let mut nodes = Vec::with_capacity(points.len());

        Self::build_recursive(&points, &mut indices, 0, &mut nodes);

        Some(Self { nodes, points })
    }

    fn build_recursive(
        points: &[DVec2],
        indices: &mut [usize],
        depth: usize,
        nodes: &mut Vec<KdNode>,
    ) -> Option<usize> {
        if indices.is_empty() {
            return None;
        }

        let split_dim = depth % 2;

        indices.sort_by(|&a, &b| {
            points[a][split_dim]
                .total_cmp(&points[b][split_dim])
                .then(a.cmp(&b))
        });

        let median = indices.len() / 2;
        let point_idx = indices[median];

        let node_idx = nodes.len();
        nodes.push(KdNode {
            point_idx,
            left: None,
            right: None,
            split_dim,
        });

        let (left_indices, right_part) = indices.split_at_mut(median);
        let right_indices = &mut right_part[1..]; // Skip the median

        let left = Self::build_recursive(points, left_indices, depth + 1, nodes);
        let right = Self::build_recursive(points, right_indices, depth + 1, nodes);

        nodes[node_idx].left = left;
        nodes[node_idx].right = right;

        Some(node_idx)
    }

    fn nearest_recursive(&self, node_idx: usize, query: DVec2, best: &mut Neighbor) {
        let node = &self.nodes[node_idx];
        let point = self.points[node.point_idx];

        let dist_sq = distance_squared(query, point);
        if best.is_beaten_by(node.point_idx, dist_sq) {
            *best = Neighbor {
                index: node.point_idx,
                dist_sq,
            };
        }

        let diff = query[node.split_dim] - point[node.split_dim];
        let (first, second) = if diff < 0.0 {
            (node.left, node.right)
        } else {
            (node.right, node.left)
        };

        if let Some(first_idx) = first {
            self.nearest_recursive(first_idx, query, best);
        }

        // Points beyond the split plane can tie with the current best, so the
        // far side is pruned only when strictly farther.
        if let Some(second_idx) = second
            && diff * diff <= best.dist_sq
        {
            self.nearest_recursive(second_idx, query, best);
        }
    }
}

impl NearestSearch for KdTree {
    fn nearest(&self, query: DVec2) -> Option<Neighbor> {
        if self.nodes.is_empty() {
            return None;
        }

        let mut best = Neighbor::NONE;
        self.nearest_recursive(0, query, &mut best);
        Some(best)
    }
}
