// Backend traits for metric lookup and dashboard publishing
use crate::domain::metric::MetricSeries;
use async_trait::async_trait;

#[async_trait]
pub trait MetricCatalog: Send + Sync {
    /// List every series of `metric_name` in `namespace`, for all resources,
    /// in backend order.
    async fn list_metrics(&self, namespace: &str, metric_name: &str) -> anyhow::Result<Vec<MetricSeries>>;
}

#[async_trait]
pub trait DashboardSink: Send + Sync {
    /// Create or replace the dashboard `name` with the JSON `body`.
    async fn put_dashboard(&self, name: &str, body: &str) -> anyhow::Result<()>;
}
