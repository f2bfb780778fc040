// CloudWatch repository implementation
use crate::application::metric_catalog::{DashboardSink, MetricCatalog};
use crate::domain::metric::{Dimension, MetricSeries};
use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_cloudwatch::Client;
use aws_sdk_cloudwatch::types::Metric;

#[derive(Debug, Clone)]
pub struct CloudWatchRepository {
    client: Client,
}

impl CloudWatchRepository {
    /// Build a client for `region` using the default credential chain
    /// (environment, shared profile, instance role).
    pub async fn connect(region: &str) -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;

        Self::from_client(Client::new(&sdk_config))
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    fn to_series(metric: &Metric, namespace: &str, metric_name: &str) -> MetricSeries {
        let dimensions = metric
            .dimensions()
            .iter()
            .map(|d| {
                Dimension::new(
                    d.name().unwrap_or_default(),
                    d.value().unwrap_or_default(),
                )
            })
            .collect();

        MetricSeries::new(
            metric.namespace().unwrap_or(namespace).to_string(),
            metric.metric_name().unwrap_or(metric_name).to_string(),
            dimensions,
        )
    }
}

#[async_trait]
impl MetricCatalog for CloudWatchRepository {
    async fn list_metrics(&self, namespace: &str, metric_name: &str) -> Result<Vec<MetricSeries>> {
        let mut pages = self
            .client
            .list_metrics()
            .namespace(namespace)
            .metric_name(metric_name)
            .into_paginator()
            .send();

        let mut series = Vec::new();
        while let Some(page) = pages.next().await {
            let page = page.with_context(|| {
                format!("Failed to list CloudWatch metrics {} {}", namespace, metric_name)
            })?;

            series.extend(
                page.metrics()
                    .iter()
                    .map(|m| Self::to_series(m, namespace, metric_name)),
            );
        }

        tracing::debug!(
            "CloudWatch returned {} series for {} {}",
            series.len(),
            namespace,
            metric_name
        );
        Ok(series)
    }
}

#[async_trait]
impl DashboardSink for CloudWatchRepository {
    async fn put_dashboard(&self, name: &str, body: &str) -> Result<()> {
        let output = self
            .client
            .put_dashboard()
            .dashboard_name(name)
            .dashboard_body(body)
            .send()
            .await
            .with_context(|| format!("Failed to put CloudWatch dashboard {}", name))?;

        for message in output.dashboard_validation_messages() {
            tracing::warn!(
                "Dashboard validation: {} ({})",
                message.message().unwrap_or_default(),
                message.data_path().unwrap_or_default()
            );
        }

        Ok(())
    }
}
