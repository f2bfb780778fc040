// Dashboard domain model, serialized as the CloudWatch dashboard body
use super::metric::MetricSeries;
use super::statistic::Statistic;
use serde::Serialize;

pub const THRESHOLD_LABEL: &str = "Threshold";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dashboard {
    pub widgets: Vec<Widget>,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Widget {
    #[serde(rename = "type")]
    pub kind: WidgetKind,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub properties: WidgetProperties,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum WidgetKind {
    Metric,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum WidgetView {
    TimeSeries,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetProperties {
    pub metrics: Vec<MetricSeries>,
    pub view: WidgetView,
    pub region: String,
    pub period: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stat: Option<Statistic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Annotations>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotations {
    pub horizontal: Vec<HorizontalAnnotation>,
}

impl Annotations {
    pub fn threshold(value: i64) -> Self {
        Self {
            horizontal: vec![HorizontalAnnotation {
                value,
                label: THRESHOLD_LABEL.to_string(),
            }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HorizontalAnnotation {
    pub value: i64,
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::metric::Dimension;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn widget(stat: Option<Statistic>, annotations: Option<Annotations>) -> Widget {
        Widget {
            kind: WidgetKind::Metric,
            x: 12,
            y: 6,
            width: 12,
            height: 6,
            properties: WidgetProperties {
                metrics: vec![MetricSeries::new(
                    "AWS/Kafka".to_string(),
                    "BytesInPerSec".to_string(),
                    vec![Dimension::new("Cluster Name", "cluster-01")],
                )],
                view: WidgetView::TimeSeries,
                region: "us-east-1".to_string(),
                period: 60,
                stat,
                annotations,
            },
        }
    }

    #[test]
    fn test_widget_json_with_stat_and_threshold() {
        let dashboard = Dashboard {
            widgets: vec![widget(Some(Statistic::Average), Some(Annotations::threshold(80)))],
        };

        assert_eq!(
            serde_json::to_value(&dashboard).unwrap(),
            json!({
                "widgets": [{
                    "type": "metric",
                    "x": 12,
                    "y": 6,
                    "width": 12,
                    "height": 6,
                    "properties": {
                        "metrics": [["AWS/Kafka", "BytesInPerSec", "Cluster Name", "cluster-01"]],
                        "view": "timeSeries",
                        "region": "us-east-1",
                        "period": 60,
                        "stat": "Average",
                        "annotations": {
                            "horizontal": [{"value": 80, "label": "Threshold"}]
                        }
                    }
                }]
            })
        );
    }

    #[test]
    fn test_widget_json_omits_absent_keys() {
        let value = serde_json::to_value(widget(None, None)).unwrap();
        let properties = value["properties"].as_object().unwrap();

        assert!(!properties.contains_key("stat"));
        assert!(!properties.contains_key("annotations"));
    }

    #[test]
    fn test_empty_dashboard() {
        let dashboard = Dashboard::new();
        assert!(dashboard.is_empty());
        assert_eq!(serde_json::to_string(&dashboard).unwrap(), r#"{"widgets":[]}"#);
    }
}
