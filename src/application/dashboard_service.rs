// Dashboard assembler - Use case for building a dashboard from a metrics CSV
use crate::application::error::GeneratorError;
use crate::application::metric_resolver::MetricResolver;
use crate::domain::dashboard::{Annotations, Dashboard, Widget, WidgetKind, WidgetProperties, WidgetView};
use crate::domain::layout::LayoutCursor;
use crate::domain::metric::MetricSeries;
use crate::domain::row_spec::RowSpec;
use crate::domain::target::ResourceTarget;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::Instrument;

pub const DEFAULT_PERIOD: u32 = 60;

pub struct DashboardAssembler {
    resolver: MetricResolver,
    target: ResourceTarget,
    period: u32,
    cursor: LayoutCursor,
    dashboard: Dashboard,
    dashboard_name: String,
    span: tracing::Span,
}

impl DashboardAssembler {
    pub fn new(resolver: MetricResolver, target: ResourceTarget, period: u32) -> Self {
        Self::with_timestamp(resolver, target, period, chrono::Utc::now().timestamp())
    }

    pub fn with_timestamp(
        resolver: MetricResolver,
        target: ResourceTarget,
        period: u32,
        unix_timestamp: i64,
    ) -> Self {
        let dashboard_name = target.dashboard_name(unix_timestamp);
        let span = tracing::info_span!("dashboard", name = %dashboard_name);

        Self {
            resolver,
            target,
            period,
            cursor: LayoutCursor::new(),
            dashboard: Dashboard::new(),
            dashboard_name,
            span,
        }
    }

    /// Name derived from the target and the construction time.
    pub fn dashboard_name(&self) -> &str {
        &self.dashboard_name
    }

    pub fn finish(self) -> Dashboard {
        self.dashboard
    }

    pub async fn assemble_file(&mut self, path: &Path) -> Result<&Dashboard, GeneratorError> {
        tracing::info!(parent: &self.span, "reading metrics from {}", path.display());
        let file = File::open(path).map_err(csv::Error::from)?;
        self.assemble(file).await
    }

    /// Process every data row of a `threshold, statistic, metric...` CSV.
    /// The first row is a header and is skipped.
    pub async fn assemble<R: Read>(&mut self, reader: R) -> Result<&Dashboard, GeneratorError> {
        let span = self.span.clone();
        let mut rows = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        for record in rows.records() {
            let record = record?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            let row = RowSpec::classify(&record);

            let produced = self
                .process_row(&row)
                .instrument(span.clone())
                .await?
                .is_some();
            if !produced && !row.metric_names.is_empty() {
                tracing::warn!(parent: &span, "skipping row {}: no metric was found", line);
            }
        }

        tracing::info!(parent: &span, "assembled {} widgets", self.dashboard.widgets.len());
        Ok(&self.dashboard)
    }

    /// Resolve every metric name of `row` and append one widget holding all
    /// resolved series. Rows resolving to nothing produce no widget and
    /// leave the layout untouched.
    pub async fn process_row(&mut self, row: &RowSpec) -> Result<Option<&Widget>, GeneratorError> {
        let mut metrics: Vec<MetricSeries> = Vec::new();

        for metric_name in &row.metric_names {
            tracing::info!(
                "adding metric: {} {} {}",
                self.target.namespace,
                self.target.region,
                metric_name
            );

            let resolved = self
                .resolver
                .resolve(&self.target.namespace, &self.target.resource_name, metric_name)
                .await?;

            if resolved.is_empty() {
                tracing::warn!(
                    "no metric was found: {} {} {}",
                    self.target.namespace,
                    self.target.region,
                    metric_name
                );
            }
            metrics.extend(resolved);
        }

        if metrics.is_empty() {
            return Ok(None);
        }

        self.add_widget(metrics, row);
        Ok(self.dashboard.widgets.last())
    }

    fn add_widget(&mut self, metrics: Vec<MetricSeries>, row: &RowSpec) {
        let (x, y) = self.cursor.position();
        let widget = Widget {
            kind: WidgetKind::Metric,
            x,
            y,
            width: self.cursor.width(),
            height: self.cursor.height(),
            properties: WidgetProperties {
                metrics,
                view: WidgetView::TimeSeries,
                region: self.target.region.clone(),
                period: self.period,
                stat: row.statistic.clone(),
                annotations: row.threshold.map(Annotations::threshold),
            },
        };

        self.dashboard.widgets.push(widget);
        self.cursor.advance();
    }
}
