//! Run configuration for the symmetry scorer.

use std::path::Path;

use anyhow::Context;
use common::file_format::FileFormat;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Nearest-neighbour search used by the matcher.
///
/// Both strategies break distance ties on the first point in storage order,
/// so they yield identical correspondences.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum MatchStrategy {
    /// Brute-force scan, O(n) per query.
    #[default]
    Linear,
    /// 2D k-d tree, built once per half.
    KdTree,
}

/// Parameters of a single scoring run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymmetryConfig {
    /// Axis y-value, used as-is or as the provisional split when `find` is set.
    pub symmetry_temp: f64,
    /// Place the axis midway between the two halves' closest points.
    pub find: bool,
    pub strategy: MatchStrategy,
}

impl Default for SymmetryConfig {
    fn default() -> Self {
        Self {
            symmetry_temp: 0.0,
            find: false,
            strategy: MatchStrategy::default(),
        }
    }
}

impl SymmetryConfig {
    pub fn new(symmetry_temp: f64, find: bool) -> Self {
        Self {
            symmetry_temp,
            find,
            ..Self::default()
        }
    }

    pub fn with_strategy(mut self, strategy: MatchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Loads a YAML or JSON config, chosen by file extension.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let format = FileFormat::from_file_name(path)?;
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read config '{}'", path.display()))?;
        common::serde::deserialize(&bytes, format)
            .with_context(|| format!("Failed to parse config '{}'", path.display()))
    }
}
