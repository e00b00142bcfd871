//! R²-style goodness of fit between mirrored and real points.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SymmetryError};
use crate::matching::PairedCoordinates;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SymmetryScore {
    /// `max(0, 1 - residual_ss / total_ss)`.
    pub score: f64,
    /// The unclamped `(total_ss - residual_ss) / total_ss`.
    pub raw: f64,
    /// Sum of squared differences between mirrored and real coordinates.
    pub residual_ss: f64,
    /// Sum of squared deviations of the real coordinates from their mean.
    pub total_ss: f64,
}

/// Scores paired coordinates.
///
/// Each sum is accumulated per axis and the two axes are then added. The
/// result is floored at 0; it cannot exceed 1 since `residual_ss >= 0`.
pub fn compute_score(paired: &PairedCoordinates) -> Result<SymmetryScore> {
    let PairedCoordinates { mirrored, real } = paired;
    debug_assert_eq!(mirrored.len(), real.len());

    if real.is_empty() {
        return Err(SymmetryError::ZeroDispersion);
    }

    let residual_ss = (0..2)
        .map(|dim| {
            real.iter()
                .zip(mirrored)
                .map(|(r, m)| (r[dim] - m[dim]).powi(2))
                .sum::<f64>()
        })
        .sum::<f64>();

    let n = real.len() as f64;
    let total_ss = (0..2)
        .map(|dim| {
            let mean = real.iter().map(|r| r[dim]).sum::<f64>() / n;
            real.iter().map(|r| (r[dim] - mean).powi(2)).sum::<f64>()
        })
        .sum::<f64>();

    if total_ss == 0.0 {
        return Err(SymmetryError::ZeroDispersion);
    }

    let raw = (total_ss - residual_ss) / total_ss;

    Ok(SymmetryScore {
        score: raw.max(0.0),
        raw,
        residual_ss,
        total_ss,
    })
}

#[cfg(test)]
mod tests {
    use common::float_ext::FloatExt;
    use glam::DVec2;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn paired(mirrored: &[(f64, f64)], real: &[(f64, f64)]) -> PairedCoordinates {
        let to_vec = |pts: &[(f64, f64)]| pts.iter().map(|&(x, y)| DVec2::new(x, y)).collect();
        PairedCoordinates {
            mirrored: to_vec(mirrored),
            real: to_vec(real),
        }
    }

    #[test]
    fn test_perfect_mirror_scores_one() {
        let p = paired(&[(0.0, 1.0), (0.0, 2.0)], &[(0.0, 1.0), (0.0, 2.0)]);
        let score = compute_score(&p).unwrap();

        assert_eq!(score.residual_ss, 0.0);
        // y mean 1.5: 0.25 + 0.25
        assert!(score.total_ss.approximately_eq(0.5));
        assert_eq!(score.score, 1.0);
    }

    #[test]
    fn test_partial_fit() {
        // real x: 0, 2 (mean 1) -> 2; real y: 0, 0 -> 0
        // residual: (0 - 0.5)^2 + (2 - 2)^2 = 0.25
        let p = paired(&[(0.5, 0.0), (2.0, 0.0)], &[(0.0, 0.0), (2.0, 0.0)]);
        let score = compute_score(&p).unwrap();

        assert!(score.residual_ss.approximately_eq(0.25));
        assert!(score.total_ss.approximately_eq(2.0));
        assert!(score.score.approximately_eq(0.875));
        assert_eq!(score.score, score.raw);
    }

    #[test]
    fn test_negative_fit_is_clamped_to_zero() {
        let p = paired(&[(10.0, 10.0), (-10.0, -10.0)], &[(0.0, 0.0), (1.0, 1.0)]);
        let score = compute_score(&p).unwrap();

        assert!(score.raw < 0.0);
        assert_eq!(score.score, 0.0);
    }

    #[test]
    fn test_zero_dispersion_fails() {
        let p = paired(&[(0.0, 0.0), (2.0, 2.0)], &[(1.0, 1.0), (1.0, 1.0)]);
        assert!(matches!(
            compute_score(&p),
            Err(SymmetryError::ZeroDispersion)
        ));
    }

    #[test]
    fn test_single_pair_has_zero_dispersion() {
        let p = paired(&[(0.0, 0.0)], &[(3.0, 4.0)]);
        assert!(matches!(
            compute_score(&p),
            Err(SymmetryError::ZeroDispersion)
        ));
    }

    #[test]
    fn test_no_pairs_fails() {
        assert!(matches!(
            compute_score(&PairedCoordinates::default()),
            Err(SymmetryError::ZeroDispersion)
        ));
    }

    #[test]
    fn test_score_stays_within_unit_interval() {
        let mut rng = StdRng::seed_from_u64(23);

        for _ in 0..200 {
            let n = rng.random_range(2..30);
            let mut point = || {
                (
                    rng.random_range(-10.0..10.0),
                    rng.random_range(-10.0..10.0),
                )
            };
            let mirrored: Vec<(f64, f64)> = (0..n).map(|_| point()).collect();
            let real: Vec<(f64, f64)> = (0..n).map(|_| point()).collect();

            let score = compute_score(&paired(&mirrored, &real)).unwrap();
            assert!((0.0..=1.0).contains(&score.score), "{score:?}");
            assert!(score.raw <= 1.0);
        }
    }
}
