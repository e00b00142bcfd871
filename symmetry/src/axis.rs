//! Locating the symmetry axis.

use glam::DVec2;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SymmetryError};
use crate::partition::partition;
use crate::point::PointSet;

/// The mirror line `y = y_sym` and the pivot `(x_sym, y_sym)` used to reflect
/// points across it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub x_sym: f64,
    pub y_sym: f64,
}

impl Axis {
    pub fn new(x_sym: f64, y_sym: f64) -> Self {
        Self { x_sym, y_sym }
    }

    #[inline]
    pub fn pivot(&self) -> DVec2 {
        DVec2::new(self.x_sym, self.y_sym)
    }
}

/// Resolves the axis for a point set.
///
/// With `find == false` the axis is `symmetry_temp` as given. Otherwise
/// `symmetry_temp` only splits the cloud provisionally, and the axis is placed
/// halfway between the highest left point and the lowest right point.
/// `x_sym` is always the minimum x over all points.
pub fn resolve_axis(points: &PointSet, symmetry_temp: f64, find: bool) -> Result<Axis> {
    let x_sym = points.min_x().ok_or(SymmetryError::EmptyInput)?;

    let y_sym = if find {
        let provisional = partition(points, symmetry_temp);
        match (provisional.left.max_y(), provisional.right.min_y()) {
            (Some(left_top), Some(right_bottom)) => (left_top + right_bottom) / 2.0,
            _ => {
                return Err(SymmetryError::DegenerateAxis {
                    left: provisional.left.len(),
                    right: provisional.right.len(),
                });
            }
        }
    } else {
        symmetry_temp
    };

    debug!(
        "Resolved symmetry axis x_sym={x_sym}, y_sym={y_sym} (provisional {symmetry_temp}, find={find})"
    );

    Ok(Axis { x_sym, y_sym })
}
