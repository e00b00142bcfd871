//! Bilateral symmetry scoring for 2D point clouds.
//!
//! Given cell positions detected in an organ image, this crate measures how
//! well one half of the cloud mirrors the other across a horizontal axis:
//!
//! 1. Resolve the axis `y = y_sym` (given, or found between the two halves).
//! 2. Split the points into `left` (`y < y_sym`) and `right` (`y > y_sym`).
//! 3. Reflect the left half across the axis.
//! 4. Pair mirrored-left and real-right points by greedy nearest neighbour.
//! 5. Score the pairs with an R²-style coefficient, floored at 0.
//!
//! # Example
//!
//! ```ignore
//! use bilateral_symmetry::{BilateralSymmetry, SymmetryConfig};
//!
//! let config = SymmetryConfig::new(250.0, true);
//! let mut analysis = BilateralSymmetry::from_file("cells.tsv".as_ref(), &config)?;
//! let outcome = analysis.evaluate()?;
//! println!("symmetry: {:.3}", outcome.score.score);
//! ```

pub mod analysis;
pub mod axis;
pub mod config;
pub mod error;
pub mod io;
pub mod matching;
pub mod partition;
pub mod point;
pub mod reflect;
pub mod report;
pub mod score;
pub mod spatial;

pub use analysis::{BilateralSymmetry, SymmetryOutcome};
pub use axis::{Axis, resolve_axis};
pub use config::{MatchStrategy, SymmetryConfig};
pub use error::{Result, Side, SymmetryError};
pub use io::{read_points, read_points_file};
pub use matching::{Correspondence, Matcher, Pair, PairedCoordinates};
pub use partition::{Halves, partition};
pub use point::{Point, PointSet};
pub use reflect::{Mapping, mirror_halves};
pub use report::SymmetryReport;
pub use score::{SymmetryScore, compute_score};
