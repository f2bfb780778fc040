// Metric series domain models
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dimension {
    pub name: String,
    pub value: String,
}

impl Dimension {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One fully dimensioned CloudWatch series.
///
/// Serializes to the dashboard metric tuple
/// `[namespace, metricName, dim1Name, dim1Value, ...]`, keeping dimension order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSeries {
    pub namespace: String,
    pub metric_name: String,
    pub dimensions: Vec<Dimension>,
}

impl MetricSeries {
    pub fn new(namespace: String, metric_name: String, dimensions: Vec<Dimension>) -> Self {
        Self {
            namespace,
            metric_name,
            dimensions,
        }
    }

    /// True if any dimension value is exactly `resource_name`.
    pub fn has_dimension_value(&self, resource_name: &str) -> bool {
        self.dimensions.iter().any(|d| d.value == resource_name)
    }
}

impl Serialize for MetricSeries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(2 + self.dimensions.len() * 2))?;
        seq.serialize_element(&self.namespace)?;
        seq.serialize_element(&self.metric_name)?;
        for dimension in &self.dimensions {
            seq.serialize_element(&dimension.name)?;
            seq.serialize_element(&dimension.value)?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_as_flat_tuple() {
        let series = MetricSeries::new(
            "AWS/Kafka".to_string(),
            "BytesInPerSec".to_string(),
            vec![
                Dimension::new("Cluster Name", "cluster-01"),
                Dimension::new("Broker ID", "1"),
            ],
        );

        assert_eq!(
            serde_json::to_value(&series).unwrap(),
            json!(["AWS/Kafka", "BytesInPerSec", "Cluster Name", "cluster-01", "Broker ID", "1"])
        );
    }

    #[test]
    fn test_has_dimension_value_is_exact() {
        let series = MetricSeries::new(
            "AWS/ES".to_string(),
            "CPUUtilization".to_string(),
            vec![Dimension::new("DomainName", "cluster-01")],
        );

        assert!(series.has_dimension_value("cluster-01"));
        assert!(!series.has_dimension_value("Cluster-01"));
        assert!(!series.has_dimension_value("cluster-01 "));
        assert!(!series.has_dimension_value("DomainName"));
    }
}
