//! # Cluster Ordering
//!
//! The result of a run: every point, in the order it was processed, with
//! its reachability and core distance.
//!
//! Undefined values are `None`. Nothing here uses infinity as a sentinel.

use serde::{Deserialize, Serialize};

use super::Label;

/// One processed point
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderedPoint {
    /// Label of the point
    pub label: Label,

    /// Reachability distance when the point was processed
    ///
    /// `None` for the first point of every density region.
    pub reachability: Option<f64>,

    /// Core distance, `None` if the point is not a core point
    pub core_distance: Option<f64>,
}

impl OrderedPoint {
    pub fn new(label: Label, reachability: Option<f64>, core_distance: Option<f64>) -> Self {
        Self {
            label,
            reachability,
            core_distance,
        }
    }

    /// Whether the point has a defined core distance
    pub fn is_core(&self) -> bool {
        self.core_distance.is_some()
    }
}

/// Processing order of all points
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClusterOrdering {
    entries: Vec<OrderedPoint>,
}

impl ClusterOrdering {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Append the next processed point
    pub fn push(&mut self, entry: OrderedPoint) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&OrderedPoint> {
        self.entries.get(position)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OrderedPoint> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[OrderedPoint] {
        &self.entries
    }

    /// Position of a label in the ordering
    pub fn position(&self, label: &Label) -> Option<usize> {
        self.entries.iter().position(|e| &e.label == label)
    }

    /// Labels in processing order
    pub fn labels(&self) -> impl Iterator<Item = &Label> + '_ {
        self.entries.iter().map(|e| &e.label)
    }

    /// Number of density regions, i.e. entries that start without a reachability
    pub fn region_count(&self) -> usize {
        self.entries.iter().filter(|e| e.reachability.is_none()).count()
    }
}

impl IntoIterator for ClusterOrdering {
    type Item = OrderedPoint;
    type IntoIter = std::vec::IntoIter<OrderedPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a ClusterOrdering {
    type Item = &'a OrderedPoint;
    type IntoIter = std::slice::Iter<'a, OrderedPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<OrderedPoint> for ClusterOrdering {
    fn from_iter<I: IntoIterator<Item = OrderedPoint>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ClusterOrdering {
        vec![
            OrderedPoint::new(Label::new("A"), None, Some(1.0)),
            OrderedPoint::new(Label::new("B"), Some(1.0), Some(1.0)),
            OrderedPoint::new(Label::new("D"), None, None),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_push_and_len() {
        let mut ordering = ClusterOrdering::new();
        assert!(ordering.is_empty());
        ordering.push(OrderedPoint::new(Label::new("A"), None, None));
        assert_eq!(ordering.len(), 1);
    }

    #[test]
    fn test_position_and_labels() {
        let ordering = sample();
        assert_eq!(ordering.position(&Label::new("D")), Some(2));
        assert_eq!(ordering.position(&Label::new("Z")), None);
        let labels: Vec<&str> = ordering.labels().map(Label::as_str).collect();
        assert_eq!(labels, ["A", "B", "D"]);
    }

    #[test]
    fn test_region_count() {
        assert_eq!(sample().region_count(), 2);
    }

    #[test]
    fn test_serializes_none_as_null() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.starts_with('['));
        assert!(json.contains("\"reachability\":null"));
    }
}
