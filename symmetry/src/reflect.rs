//! Mirroring points across the symmetry axis.

use glam::DVec2;

use crate::axis::Axis;
use crate::partition::Halves;
use crate::point::{Point, PointSet};

/// Per-component scale applied around the pivot: keep x, flip y.
const MIRROR: DVec2 = DVec2::new(1.0, -1.0);

impl Axis {
    /// Reflects `pos` across the axis: x is kept, `y' = 2 * y_sym - y`.
    #[inline]
    pub fn reflect(&self, pos: DVec2) -> DVec2 {
        let pivot = self.pivot();
        (pos - pivot) * MIRROR + pivot
    }

    /// Reflects every point of `set`, keeping each point's original index.
    pub fn reflect_set(&self, set: &PointSet) -> PointSet {
        set.iter()
            .map(|p| Point::new(p.index, self.reflect(p.pos)))
            .collect()
    }
}

/// Both halves reflected onto the opposite side.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mapping {
    /// Left half mirrored into the right half's region.
    pub mapped_left: PointSet,
    /// Right half mirrored into the left half's region.
    pub mapped_right: PointSet,
}

pub fn mirror_halves(axis: &Axis, halves: &Halves) -> Mapping {
    Mapping {
        mapped_left: axis.reflect_set(&halves.left),
        mapped_right: axis.reflect_set(&halves.right),
    }
}
