use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::analysis::{BilateralSymmetry, SymmetryOutcome};
use crate::axis::Axis;
use crate::config::MatchStrategy;
use crate::matching::Pair;

/// Serializable summary of a scoring run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymmetryReport {
    pub axis: Axis,
    pub strategy: MatchStrategy,
    pub total_points: usize,
    pub left_points: usize,
    pub right_points: usize,
    /// Original indices of points on the axis, excluded from scoring.
    pub boundary_points: Vec<usize>,
    pub primary_pairs: usize,
    pub remainder_pairs: usize,
    pub score: f64,
    pub raw_score: f64,
    pub residual_ss: f64,
    pub total_ss: f64,
    pub pairs: Vec<Pair>,
    pub mirrored: Vec<DVec2>,
    pub real: Vec<DVec2>,
}

impl SymmetryReport {
    pub fn new(analysis: &BilateralSymmetry, outcome: &SymmetryOutcome) -> Self {
        let halves = analysis.halves();
        Self {
            axis: analysis.axis(),
            strategy: analysis.config().strategy,
            total_points: analysis.points().len(),
            left_points: halves.left.len(),
            right_points: halves.right.len(),
            boundary_points: halves.boundary.indices(),
            primary_pairs: outcome.correspondence.primary_count(),
            remainder_pairs: outcome.correspondence.remainder_count(),
            score: outcome.score.score,
            raw_score: outcome.score.raw,
            residual_ss: outcome.score.residual_ss,
            total_ss: outcome.score.total_ss,
            pairs: outcome.correspondence.pairs().to_vec(),
            mirrored: outcome.paired.mirrored.clone(),
            real: outcome.paired.real.clone(),
        }
    }
}
