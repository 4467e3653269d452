//! # Label
//!
//! Caller-chosen identifier of an input point.
//!
//! - Unique within one run
//! - Totally ordered by byte order, which is the seed queue tie-break
//! - Serialized as a plain string

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unique identifier for an input point
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Label(String);

impl Label {
    /// Create a label from anything string-like
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Label {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Label {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for Label {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_ordering() {
        let mut labels = vec![Label::new("J"), Label::new("G"), Label::new("B10"), Label::new("B2")];
        labels.sort();
        let names: Vec<&str> = labels.iter().map(Label::as_str).collect();
        assert_eq!(names, ["B10", "B2", "G", "J"]);
    }

    #[test]
    fn test_label_display() {
        assert_eq!(format!("{}", Label::new("A")), "A");
    }

    #[test]
    fn test_label_serde_transparent() {
        let json = serde_json::to_string(&Label::new("K")).unwrap();
        assert_eq!(json, "\"K\"");
        let back: Label = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Label::new("K"));
    }
}
