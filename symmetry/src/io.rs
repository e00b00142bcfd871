//! Reading point tables.
//!
//! The input is a headerless table with one point per line and exactly two
//! tab-separated numeric fields, `x` then `y`. Anything else is rejected with
//! the offending line number rather than guessed at.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use glam::DVec2;
use log::debug;

use crate::error::{Result, SymmetryError};
use crate::point::PointSet;

const DELIMITER: char = '\t';

/// Reads a point table from `path`.
pub fn read_points_file(path: &Path) -> Result<PointSet> {
    let file = File::open(path).map_err(|source| SymmetryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let points = read_points(BufReader::new(file))?;
    debug!("Read {} points from {}", points.len(), path.display());
    Ok(points)
}

/// Reads a point table from any buffered reader.
pub fn read_points<R: BufRead>(reader: R) -> Result<PointSet> {
    let mut positions = Vec::new();

    for (line_idx, bytes) in reader.split(b'\n').enumerate() {
        let line_no = line_idx + 1;
        let bytes = bytes?;
        let bytes = bytes.strip_suffix(b"\r").unwrap_or(&bytes[..]);
        let line =
            std::str::from_utf8(bytes).map_err(|_| malformed(line_no, "invalid UTF-8"))?;
        positions.push(parse_line(line, line_no)?);
    }

    if positions.is_empty() {
        return Err(malformed(1, "input contains no points"));
    }

    Ok(PointSet::from_positions(&positions))
}

fn parse_line(line: &str, line_no: usize) -> Result<DVec2> {
    if line.is_empty() {
        return Err(malformed(line_no, "blank line"));
    }

    let fields: Vec<&str> = line.split(DELIMITER).collect();
    let [x, y] = fields.as_slice() else {
        return Err(malformed(
            line_no,
            format!(
                "expected 2 tab-separated fields, found {}",
                fields.len()
            ),
        ));
    };

    Ok(DVec2::new(
        parse_field(x, "x", line_no)?,
        parse_field(y, "y", line_no)?,
    ))
}

fn parse_field(field: &str, name: &str, line_no: usize) -> Result<f64> {
    if field.is_empty() {
        return Err(malformed(line_no, format!("missing {name} value")));
    }

    let value: f64 = field
        .parse()
        .map_err(|_| malformed(line_no, format!("{name} value '{field}' is not a number")))?;

    if !value.is_finite() {
        return Err(malformed(
            line_no,
            format!("{name} value '{field}' is not finite"),
        ));
    }

    Ok(value)
}

fn malformed(line: usize, reason: impl Into<String>) -> SymmetryError {
    SymmetryError::MalformedInput {
        line,
        reason: reason.into(),
    }
}
