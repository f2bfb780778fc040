// Metric resolver - Find the series of a metric that belong to one resource
use crate::application::error::GeneratorError;
use crate::application::metric_catalog::MetricCatalog;
use crate::domain::metric::MetricSeries;
use std::sync::Arc;

#[derive(Clone)]
pub struct MetricResolver {
    catalog: Arc<dyn MetricCatalog>,
}

impl MetricResolver {
    pub fn new(catalog: Arc<dyn MetricCatalog>) -> Self {
        Self { catalog }
    }

    /// Every catalog series of `metric_name` with a dimension value equal to
    /// `resource_name`. Each series appears at most once, in catalog order.
    /// An empty result is not an error.
    pub async fn resolve(
        &self,
        namespace: &str,
        resource_name: &str,
        metric_name: &str,
    ) -> Result<Vec<MetricSeries>, GeneratorError> {
        let candidates = self
            .catalog
            .list_metrics(namespace, metric_name)
            .await
            .map_err(|e| GeneratorError::Catalog {
                metric_name: metric_name.to_string(),
                message: format!("{e:#}"),
            })?;

        tracing::debug!(
            "{} candidate series for {} {}",
            candidates.len(),
            namespace,
            metric_name
        );

        Ok(candidates
            .into_iter()
            .filter(|series| series.has_dimension_value(resource_name))
            .collect())
    }
}
