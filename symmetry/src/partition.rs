//! Splitting a point set into the two halves on either side of the axis.

use crate::point::PointSet;

/// Result of splitting a point set at `y_sym`.
///
/// Points lying exactly on the axis belong to neither half and are kept in
/// `boundary` so callers can see what was dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Halves {
    /// Points with `y < y_sym`.
    pub left: PointSet,
    /// Points with `y > y_sym`.
    pub right: PointSet,
    pub boundary: PointSet,
}

impl Halves {
    pub fn len(&self) -> usize {
        self.left.len() + self.right.len() + self.boundary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn partition(points: &PointSet, y_sym: f64) -> Halves {
    let mut left = Vec::new();
    let mut right = Vec::new();
    let mut boundary = Vec::new();

    for &point in points {
        if point.y() < y_sym {
            left.push(point);
        } else if point.y() > y_sym {
            right.push(point);
        } else {
            boundary.push(point);
        }
    }

    Halves {
        left: PointSet::from_points(left),
        right: PointSet::from_points(right),
        boundary: PointSet::from_points(boundary),
    }
}
