// Cell validators for the metrics CSV
use regex::Regex;
use std::sync::LazyLock;

const BASIC_STATISTICS: [&str; 5] = ["SampleCount", "Average", "Sum", "Minimum", "Maximum"];

// ASCII digits only, so every match also parses as a number
static INTEGER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-?[0-9]+$").expect("valid regex"));

// "p" followed by an integer or decimal; range is checked separately
static PERCENTILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^p([0-9]+(?:\.[0-9]*)?|\.[0-9]+)$").expect("valid regex"));

/// Optional leading minus followed by ASCII digits, nothing else.
pub fn is_integer(value: &str) -> bool {
    INTEGER.is_match(value)
}

/// Rejects missing, empty and whitespace-only names.
pub fn is_valid_metric_name(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// CloudWatch statistic keyword (case-sensitive) or a percentile `p0`..`p100`.
pub fn is_valid_statistic(value: &str) -> bool {
    if BASIC_STATISTICS.contains(&value) {
        return true;
    }

    PERCENTILE
        .captures(value)
        .and_then(|caps| caps[1].parse::<f64>().ok())
        .is_some_and(|percentile| (0.0..=100.0).contains(&percentile))
}
