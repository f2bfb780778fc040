// Statistic applied when rendering a widget's series
use super::validators::is_valid_statistic;
use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statistic {
    SampleCount,
    Average,
    Sum,
    Minimum,
    Maximum,
    /// Percentile as written in the source cell, e.g. `p99.9`.
    Percentile(String),
}

impl Statistic {
    /// Returns `None` for anything `is_valid_statistic` rejects.
    pub fn parse(value: &str) -> Option<Self> {
        if !is_valid_statistic(value) {
            return None;
        }

        let statistic = match value {
            "SampleCount" => Self::SampleCount,
            "Average" => Self::Average,
            "Sum" => Self::Sum,
            "Minimum" => Self::Minimum,
            "Maximum" => Self::Maximum,
            percentile => Self::Percentile(percentile.to_string()),
        };
        Some(statistic)
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SampleCount => f.write_str("SampleCount"),
            Self::Average => f.write_str("Average"),
            Self::Sum => f.write_str("Sum"),
            Self::Minimum => f.write_str("Minimum"),
            Self::Maximum => f.write_str("Maximum"),
            Self::Percentile(text) => f.write_str(text),
        }
    }
}

impl Serialize for Statistic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
