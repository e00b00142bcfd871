//! End-to-end symmetry analysis of one point cloud.

use std::path::Path;

use log::{debug, info, warn};

use crate::axis::{Axis, resolve_axis};
use crate::config::SymmetryConfig;
use crate::error::{Result, SymmetryError};
use crate::io::read_points_file;
use crate::matching::{Correspondence, Matcher, PairedCoordinates};
use crate::partition::{Halves, partition};
use crate::point::PointSet;
use crate::reflect::{Mapping, mirror_halves};
use crate::report::SymmetryReport;
use crate::score::{SymmetryScore, compute_score};

/// Everything produced by a scoring run.
#[derive(Debug, Clone, PartialEq)]
pub struct SymmetryOutcome {
    pub score: SymmetryScore,
    pub correspondence: Correspondence,
    pub paired: PairedCoordinates,
}

/// A point cloud with its resolved axis and halves.
///
/// The axis and halves are fixed at construction. [`mapping`](Self::mapping)
/// reflects the halves and must run before
/// [`symmetric_score`](Self::symmetric_score); [`evaluate`](Self::evaluate)
/// does both.
#[derive(Debug, Clone)]
pub struct BilateralSymmetry {
    points: PointSet,
    config: SymmetryConfig,
    axis: Axis,
    halves: Halves,
    mapping: Option<Mapping>,
}

impl BilateralSymmetry {
    /// Resolves the axis and splits `points` into halves.
    ///
    /// Every coordinate must be finite; the first offending row is reported
    /// as [`SymmetryError::NonFinitePoint`].
    pub fn new(points: PointSet, config: &SymmetryConfig) -> Result<Self> {
        if let Some(point) = points.iter().find(|point| !point.pos.is_finite()) {
            return Err(SymmetryError::NonFinitePoint { index: point.index });
        }

        let axis = resolve_axis(&points, config.symmetry_temp, config.find)?;
        let halves = partition(&points, axis.y_sym);
        debug!(
            "Partitioned {} points: {} left, {} right, {} on axis",
            points.len(),
            halves.left.len(),
            halves.right.len(),
            halves.boundary.len()
        );

        if !halves.boundary.is_empty() {
            warn!(
                "{} point(s) lie exactly on the axis y = {} and are excluded from both halves",
                halves.boundary.len(),
                axis.y_sym
            );
        }
        if halves.left.len() != halves.right.len() {
            warn!(
                "Halves differ in size: {} left, {} right",
                halves.left.len(),
                halves.right.len()
            );
        }

        Ok(Self {
            points,
            config: config.clone(),
            axis,
            halves,
            mapping: None,
        })
    }

    pub fn from_file(path: &Path, config: &SymmetryConfig) -> Result<Self> {
        Self::new(read_points_file(path)?, config)
    }

    pub fn points(&self) -> &PointSet {
        &self.points
    }

    pub fn config(&self) -> &SymmetryConfig {
        &self.config
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn halves(&self) -> &Halves {
        &self.halves
    }

    /// Reflects each half onto the opposite side and returns
    /// `(mapped_left, mapped_right)`. Computed once and cached.
    pub fn mapping(&mut self) -> (&PointSet, &PointSet) {
        let mapping = self
            .mapping
            .get_or_insert_with(|| mirror_halves(&self.axis, &self.halves));
        (&mapping.mapped_left, &mapping.mapped_right)
    }

    /// Matches the mirrored left half to the real right half and scores the
    /// fit. Fails with [`SymmetryError::Sequencing`] if
    /// [`mapping`](Self::mapping) has not been called.
    pub fn symmetric_score(&self) -> Result<SymmetryOutcome> {
        let mapping = self.mapping.as_ref().ok_or(SymmetryError::Sequencing)?;
        let right = &self.halves.right;

        let correspondence =
            Matcher::new(self.config.strategy).match_points(&mapping.mapped_left, right)?;
        let paired = correspondence.paired_coordinates(&mapping.mapped_left, right)?;
        let score = compute_score(&paired)?;

        info!(
            "Symmetry score {:.4} over {} pairs (residual {:.4}, total {:.4})",
            score.score,
            correspondence.len(),
            score.residual_ss,
            score.total_ss
        );

        Ok(SymmetryOutcome {
            score,
            correspondence,
            paired,
        })
    }

    /// Runs [`mapping`](Self::mapping) then
    /// [`symmetric_score`](Self::symmetric_score).
    pub fn evaluate(&mut self) -> Result<SymmetryOutcome> {
        self.mapping();
        self.symmetric_score()
    }

    pub fn report(&self, outcome: &SymmetryOutcome) -> SymmetryReport {
        SymmetryReport::new(self, outcome)
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec2;

    use super::*;
    use crate::matching::Pair;

    fn mirror_example() -> PointSet {
        PointSet::from_positions(&[
            DVec2::new(0.0, 1.0),
            DVec2::new(0.0, 2.0),
            DVec2::new(0.0, -1.0),
            DVec2::new(0.0, -2.0),
        ])
    }

    #[test]
    fn test_score_before_mapping_is_a_sequencing_error() {
        let analysis = BilateralSymmetry::new(mirror_example(), &SymmetryConfig::default()).unwrap();
        assert!(matches!(
            analysis.symmetric_score(),
            Err(SymmetryError::Sequencing)
        ));
    }

    #[test]
    fn test_mirror_example_end_to_end() {
        let mut analysis =
            BilateralSymmetry::new(mirror_example(), &SymmetryConfig::default()).unwrap();
        assert_eq!(analysis.axis(), Axis::new(0.0, 0.0));

        let (mapped_left, mapped_right) = analysis.mapping();
        assert_eq!(
            mapped_left.positions(),
            vec![DVec2::new(0.0, 1.0), DVec2::new(0.0, 2.0)]
        );
        assert_eq!(mapped_right.indices(), vec![0, 1]);

        let outcome = analysis.symmetric_score().unwrap();
        assert_eq!(
            outcome.correspondence.pairs(),
            &[Pair::new(2, 0), Pair::new(3, 1)]
        );
        assert_eq!(outcome.score.residual_ss, 0.0);
        assert!(outcome.score.total_ss > 0.0);
        assert_eq!(outcome.score.score, 1.0);
        assert_eq!(outcome.paired.mirrored, outcome.paired.real);
    }

    #[test]
    fn test_mapping_is_cached() {
        let mut analysis =
            BilateralSymmetry::new(mirror_example(), &SymmetryConfig::default()).unwrap();
        let first = analysis.mapping().0.clone();
        let second = analysis.mapping().0.clone();
        assert_eq!(first, second);
    }

    #[test]
    fn test_evaluate_runs_mapping_first() {
        let mut analysis =
            BilateralSymmetry::new(mirror_example(), &SymmetryConfig::default()).unwrap();
        let outcome = analysis.evaluate().unwrap();
        assert_eq!(outcome.score.score, 1.0);
    }

    #[test]
    fn test_duplicate_right_points_have_zero_dispersion() {
        let points = PointSet::from_positions(&[
            DVec2::new(1.0, 1.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(1.0, -1.0),
        ]);
        let mut analysis = BilateralSymmetry::new(points, &SymmetryConfig::default()).unwrap();
        assert!(matches!(
            analysis.evaluate(),
            Err(SymmetryError::ZeroDispersion)
        ));
    }

    #[test]
    fn test_find_mode_without_left_points() {
        let points = PointSet::from_positions(&[DVec2::new(0.0, 1.0), DVec2::new(0.0, 2.0)]);
        let err = BilateralSymmetry::new(points, &SymmetryConfig::new(0.0, true)).unwrap_err();
        assert!(matches!(err, SymmetryError::DegenerateAxis { .. }));
    }

    #[test]
    fn test_fixed_axis_without_left_points_fails_at_matching() {
        let points = PointSet::from_positions(&[DVec2::new(0.0, 1.0), DVec2::new(0.0, 2.0)]);
        let mut analysis = BilateralSymmetry::new(points, &SymmetryConfig::default()).unwrap();
        assert!(matches!(
            analysis.evaluate(),
            Err(SymmetryError::EmptyHalf { .. })
        ));
    }

    #[test]
    fn test_non_finite_point_is_rejected() {
        let points = PointSet::from_positions(&[
            DVec2::new(0.0, 1.0),
            DVec2::new(f64::NAN, -1.0),
            DVec2::new(0.0, f64::INFINITY),
        ]);
        let err = BilateralSymmetry::new(points, &SymmetryConfig::default()).unwrap_err();
        assert!(matches!(err, SymmetryError::NonFinitePoint { index: 1 }));
    }

    #[test]
    fn test_nan_only_half_fails_on_the_point() {
        let points = PointSet::from_positions(&[
            DVec2::new(0.0, 1.0),
            DVec2::new(f64::NAN, -1.0),
        ]);
        let err = BilateralSymmetry::new(points, &SymmetryConfig::default()).unwrap_err();
        assert!(!matches!(err, SymmetryError::EmptyHalf { .. }));
        assert!(matches!(err, SymmetryError::NonFinitePoint { index: 1 }));
    }

    #[test]
    fn test_found_axis_recentres_shifted_cloud() {
        // Mirror image around y = 10; provisional axis 9 still separates it.
        let points = PointSet::from_positions(&[
            DVec2::new(1.0, 12.0),
            DVec2::new(2.0, 14.0),
            DVec2::new(1.0, 8.0),
            DVec2::new(2.0, 6.0),
        ]);
        let mut analysis = BilateralSymmetry::new(points, &SymmetryConfig::new(9.0, true)).unwrap();
        assert_eq!(analysis.axis().y_sym, 10.0);
        assert_eq!(analysis.axis().x_sym, 1.0);

        let outcome = analysis.evaluate().unwrap();
        assert_eq!(outcome.score.score, 1.0);
    }
}
