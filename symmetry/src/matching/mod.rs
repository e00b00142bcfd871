//! Greedy nearest-neighbour correspondence between the mirrored left half and
//! the real right half.
//!
//! Matching runs in two passes:
//!
//! 1. **Primary**: every right point picks its nearest mirrored-left point.
//!    Several right points may pick the same mirrored point.
//! 2. **Remainder**: every mirrored-left point that no right point picked is
//!    paired with its own nearest right point.
//!
//! The union of both passes is sorted by `(left, right)` index. Every
//! mirrored-left point ends up in at least one pair and every right point is
//! paired by the primary pass, so right points can appear more than once when
//! the remainder pass selects them again. The score is computed over this
//! multiset as-is.

use glam::DVec2;
use hashbrown::HashSet;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::MatchStrategy;
use crate::error::{Result, Side, SymmetryError};
use crate::point::PointSet;
use crate::spatial::{KdTree, LinearScan, NearestSearch};


/// A mirrored-left point paired with a real right point, by original index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pair {
    pub left: usize,
    pub right: usize,
}

impl Pair {
    pub fn new(left: usize, right: usize) -> Self {
        Self { left, right }
    }
}

/// Final sorted list of pairs plus how many came from each pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Correspondence {
    pairs: Vec<Pair>,
    primary_count: usize,
    remainder_count: usize,
}

impl Correspondence {
    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pair> {
        self.pairs.iter()
    }

    /// Pairs found by right points choosing their nearest mirrored point.
    pub fn primary_count(&self) -> usize {
        self.primary_count
    }

    /// Pairs added for mirrored points no right point chose.
    pub fn remainder_count(&self) -> usize {
        self.remainder_count
    }

    /// Looks up the coordinates of every pair.
    ///
    /// `mirrored[k]` comes from `mapped_left` and `real[k]` from `right`, both
    /// by the original indices stored in pair `k`.
    pub fn paired_coordinates(
        &self,
        mapped_left: &PointSet,
        right: &PointSet,
    ) -> Result<PairedCoordinates> {
        let lookup = |set: &PointSet, index: usize| {
            set.get_by_index(index)
                .map(|p| p.pos)
                .ok_or(SymmetryError::UnknownPointIndex { index })
        };

        let mut mirrored = Vec::with_capacity(self.pairs.len());
        let mut real = Vec::with_capacity(self.pairs.len());
        for pair in &self.pairs {
            mirrored.push(lookup(mapped_left, pair.left)?);
            real.push(lookup(right, pair.right)?);
        }

        Ok(PairedCoordinates { mirrored, real })
    }
}

impl<'a> IntoIterator for &'a Correspondence {
    type Item = &'a Pair;
    type IntoIter = std::slice::Iter<'a, Pair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

/// Coordinates of paired points, aligned by correspondence order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PairedCoordinates {
    /// Mirrored left-half positions.
    pub mirrored: Vec<DVec2>,
    /// Real right-half positions.
    pub real: Vec<DVec2>,
}

impl PairedCoordinates {
    pub fn len(&self) -> usize {
        self.real.len()
    }

    pub fn is_empty(&self) -> bool {
        self.real.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Matcher {
    strategy: MatchStrategy,
}

impl Matcher {
    pub fn new(strategy: MatchStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> MatchStrategy {
        self.strategy
    }

    /// Pairs `mapped_left` with `right`. Both must be non-empty.
    pub fn match_points(&self, mapped_left: &PointSet, right: &PointSet) -> Result<Correspondence> {
        if mapped_left.is_empty() {
            return Err(SymmetryError::EmptyHalf { side: Side::Left });
        }
        if right.is_empty() {
            return Err(SymmetryError::EmptyHalf { side: Side::Right });
        }

        let left_positions = mapped_left.positions();
        let right_positions = right.positions();

        match self.strategy {
            MatchStrategy::Linear => greedy_pairs(
                mapped_left,
                right,
                &LinearScan::new(&left_positions),
                &LinearScan::new(&right_positions),
            ),
            MatchStrategy::KdTree => {
                let left_tree = KdTree::build(&left_positions)
                    .ok_or(SymmetryError::EmptyHalf { side: Side::Left })?;
                let right_tree = KdTree::build(&right_positions)
                    .ok_or(SymmetryError::EmptyHalf { side: Side::Right })?;
                greedy_pairs(mapped_left, right, &left_tree, &right_tree)
            }
        }
    }
}

/// Runs both passes with the given searches over `mapped_left` and `right`
/// positions respectively.
fn greedy_pairs<L, R>(
    mapped_left: &PointSet,
    right: &PointSet,
    left_search: &L,
    right_search: &R,
) -> Result<Correspondence>
where
    L: NearestSearch + ?Sized,
    R: NearestSearch + ?Sized,
{
    let left_points = mapped_left.points();
    let right_points = right.points();

    let primary = right_points
        .iter()
        .map(|real| {
            let nearest = left_search
                .nearest(real.pos)
                .ok_or(SymmetryError::EmptyHalf { side: Side::Left })?;
            Ok(Pair::new(left_points[nearest.index].index, real.index))
        })
        .collect::<Result<Vec<Pair>>>()?;

    let selected: HashSet<usize> = primary.iter().map(|pair| pair.left).collect();

    let remainder = left_points
        .iter()
        .filter(|mirrored| !selected.contains(&mirrored.index))
        .map(|mirrored| {
            let nearest = right_search
                .nearest(mirrored.pos)
                .ok_or(SymmetryError::EmptyHalf { side: Side::Right })?;
            Ok(Pair::new(mirrored.index, right_points[nearest.index].index))
        })
        .collect::<Result<Vec<Pair>>>()?;

    debug!(
        "Matched {} right points to {} mirrored points, {} mirrored points left for the remainder pass",
        right_points.len(),
        selected.len(),
        remainder.len()
    );

    let primary_count = primary.len();
    let remainder_count = remainder.len();

    let mut pairs = primary;
    pairs.extend(remainder);
    pairs.sort_unstable();

    Ok(Correspondence {
        pairs,
        primary_count,
        remainder_count,
    })
}
