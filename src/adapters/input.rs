//! # Text Input Adapter
//!
//! Reads point records, one per line:
//!
//! ```text
//! # x        y          label
//! 40.00000   69.835013  A
//! 78.0952367 153.64454  B
//! ```
//!
//! Fields are whitespace separated. Blank lines and lines starting with `#`
//! are skipped. Anything else that is not exactly `x y label` with finite
//! numeric coordinates is a parse error naming the line.

use std::collections::HashMap;
use std::io::Read;

use crate::core::{Label, LabeledPoint, Point};
use crate::error::{OpticsError, Result};

/// Parse one record; `line` is 1-based and only used for errors
pub fn parse_record(line: usize, text: &str) -> Result<LabeledPoint> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    let [x, y, label] = fields.as_slice() else {
        return Err(OpticsError::parse(
            line,
            format!("expected 3 fields (x y label), got {}", fields.len()),
        ));
    };

    let x = parse_coordinate(line, "x", x)?;
    let y = parse_coordinate(line, "y", y)?;
    Ok(LabeledPoint::new(Label::new(*label), Point::new(x, y)))
}

fn parse_coordinate(line: usize, axis: &str, field: &str) -> Result<f64> {
    let value: f64 = field
        .parse()
        .map_err(|_| OpticsError::parse(line, format!("{axis} coordinate '{field}' is not a number")))?;
    if !value.is_finite() {
        return Err(OpticsError::parse(
            line,
            format!("{axis} coordinate '{field}' is not finite"),
        ));
    }
    Ok(value)
}

fn is_skipped(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// Parse every record in `text`, keeping input order
pub fn parse_records(text: &str) -> Result<Vec<LabeledPoint>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !is_skipped(line))
        .map(|(i, line)| parse_record(i + 1, line))
        .collect()
}

/// Parse records and reject duplicate labels
///
/// `first`/`second` of a `DuplicateLabel` error are record positions.
pub fn load_points(text: &str) -> Result<Vec<LabeledPoint>> {
    let points = parse_records(text)?;
    let mut seen: HashMap<&Label, usize> = HashMap::with_capacity(points.len());
    for (index, lp) in points.iter().enumerate() {
        if let Some(&first) = seen.get(&lp.label) {
            return Err(OpticsError::DuplicateLabel {
                label: lp.label.clone(),
                first,
                second: index,
            });
        }
        seen.insert(&lp.label, index);
    }
    Ok(points)
}

/// Read and load records from any reader (file, stdin)
pub fn read_points<R: Read>(mut reader: R) -> Result<Vec<LabeledPoint>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    load_points(&text)
}
