//! # Report Adapter
//!
//! Turns a cluster ordering into what a person or a chart consumes:
//! - core distance table (defined values only, rounded)
//! - ordering lines `label reachability core`
//! - bubble chart rows `(label, x, y, core, reachability or 0)`, input order
//! - reachability plot rows `(label, reachability)`, processing order
//!
//! Rendered as plain text (`Display`) or JSON (serde).

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::core::{ClusterOrdering, Label, LabeledPoint, OpticsConfig, OrderedPoint};
use crate::error::Result;

/// Round to a number of decimal places
///
/// ```
/// use optics_ordering::adapters::report::round_to;
/// assert_eq!(round_to(93.6680087, 2), 93.67);
/// ```
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let multiplier = 10f64.powi(decimals as i32);
    (value * multiplier).round() / multiplier
}

fn format_value(value: Option<f64>, decimals: u32) -> String {
    match value {
        Some(v) => format!("{}", round_to(v, decimals)),
        None => "undefined".to_string(),
    }
}

/// One defined core distance
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CoreDistanceRow {
    pub label: Label,
    pub core_distance: f64,
}

/// One bubble chart row
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlotRow {
    pub label: Label,
    pub x: f64,
    pub y: f64,
    pub core_distance: Option<f64>,
    /// 0 stands in for an undefined reachability
    pub reachability: f64,
}

/// One reachability plot bar
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReachabilityRow {
    pub label: Label,
    pub reachability: Option<f64>,
}

fn by_label(ordering: &ClusterOrdering) -> HashMap<&Label, &OrderedPoint> {
    ordering.iter().map(|e| (&e.label, e)).collect()
}

/// Core distances in input order, rounded; non-core points are left out
pub fn core_distance_table(
    points: &[LabeledPoint],
    ordering: &ClusterOrdering,
    decimals: u32,
) -> Vec<CoreDistanceRow> {
    let entries = by_label(ordering);
    points
        .iter()
        .filter_map(|lp| {
            let core = entries.get(&lp.label)?.core_distance?;
            Some(CoreDistanceRow {
                label: lp.label.clone(),
                core_distance: round_to(core, decimals),
            })
        })
        .collect()
}

/// `label reachability core` per processed point
pub fn ordering_lines(ordering: &ClusterOrdering, decimals: u32) -> Vec<String> {
    ordering
        .iter()
        .map(|e| {
            format!(
                "{} {} {}",
                e.label,
                format_value(e.reachability, decimals),
                format_value(e.core_distance, decimals)
            )
        })
        .collect()
}

/// Bubble chart rows in input order
pub fn plot_rows(points: &[LabeledPoint], ordering: &ClusterOrdering) -> Vec<PlotRow> {
    let entries = by_label(ordering);
    points
        .iter()
        .filter_map(|lp| {
            let entry = entries.get(&lp.label)?;
            Some(PlotRow {
                label: lp.label.clone(),
                x: lp.point.x(),
                y: lp.point.y(),
                core_distance: entry.core_distance,
                reachability: entry.reachability.unwrap_or(0.0),
            })
        })
        .collect()
}

/// Reachability plot rows in processing order
pub fn reachability_rows(ordering: &ClusterOrdering) -> Vec<ReachabilityRow> {
    ordering
        .iter()
        .map(|e| ReachabilityRow {
            label: e.label.clone(),
            reachability: e.reachability,
        })
        .collect()
}

/// Output format of a report
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Unknown output format name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown format '{0}' (expected text or json)")]
pub struct UnknownFormat(pub String);

impl FromStr for OutputFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

/// Everything produced by one run, ready to print
#[derive(Clone, Debug, Serialize)]
pub struct Report {
    pub min_pts: usize,
    pub epsilon: f64,
    pub metric: &'static str,
    #[serde(skip)]
    pub decimals: u32,
    pub core_distances: Vec<CoreDistanceRow>,
    pub ordering: ClusterOrdering,
    pub plot: Vec<PlotRow>,
    pub reachability_plot: Vec<ReachabilityRow>,
}

impl Report {
    /// Assemble a report from the input and the resulting ordering
    pub fn build(
        points: &[LabeledPoint],
        ordering: ClusterOrdering,
        config: &OpticsConfig,
        decimals: u32,
    ) -> Self {
        Self {
            min_pts: config.min_pts,
            epsilon: config.epsilon,
            metric: config.metric.name(),
            decimals,
            core_distances: core_distance_table(points, &ordering, decimals),
            plot: plot_rows(points, &ordering),
            reachability_plot: reachability_rows(&ordering),
            ordering,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render in the requested format
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_string()),
            OutputFormat::Json => self.to_json(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Core distances (minPts {}, epsilon {}, {}):",
            self.min_pts, self.epsilon, self.metric
        )?;
        for row in &self.core_distances {
            writeln!(f, "  {} -> {}", row.label, row.core_distance)?;
        }
        writeln!(f)?;
        writeln!(f, "Cluster ordering (label reachability core):")?;
        for line in ordering_lines(&self.ordering, self.decimals) {
            writeln!(f, "  {line}")?;
        }
        Ok(())
    }
}
