//! Indexed 2D points and ordered point sets.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A detected position together with its row in the source table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Zero-based row of the point in the input. Preserved through
    /// partitioning and reflection.
    pub index: usize,
    pub pos: DVec2,
}

impl Point {
    pub fn new(index: usize, pos: DVec2) -> Self {
        Self { index, pos }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.pos.y
    }
}

/// Ordered collection of points with strictly ascending indices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Builds a set from raw positions, indexing them `0..n` in order.
    pub fn from_positions(positions: &[DVec2]) -> Self {
        let points = positions
            .iter()
            .enumerate()
            .map(|(index, &pos)| Point::new(index, pos))
            .collect();
        Self { points }
    }

    /// Builds a set from already indexed points.
    ///
    /// Indices must be strictly ascending; subsets produced by filtering a
    /// `PointSet` always are.
    pub fn from_points(points: Vec<Point>) -> Self {
        debug_assert!(
            points.windows(2).all(|w| w[0].index < w[1].index),
            "point indices must be strictly ascending"
        );
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Positions in storage order.
    pub fn positions(&self) -> Vec<DVec2> {
        self.points.iter().map(|p| p.pos).collect()
    }

    /// Original indices in storage order.
    pub fn indices(&self) -> Vec<usize> {
        self.points.iter().map(|p| p.index).collect()
    }

    /// Looks a point up by its original index.
    pub fn get_by_index(&self, index: usize) -> Option<&Point> {
        self.points
            .binary_search_by_key(&index, |p| p.index)
            .ok()
            .map(|pos| &self.points[pos])
    }

    pub fn min_x(&self) -> Option<f64> {
        self.points.iter().map(Point::x).reduce(f64::min)
    }

    pub fn min_y(&self) -> Option<f64> {
        self.points.iter().map(Point::y).reduce(f64::min)
    }

    pub fn max_y(&self) -> Option<f64> {
        self.points.iter().map(Point::y).reduce(f64::max)
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::from_points(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
