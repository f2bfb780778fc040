// Publish service - Save the assembled dashboard and upload it
use crate::application::error::PublishError;
use crate::application::metric_catalog::DashboardSink;
use crate::domain::dashboard::Dashboard;
use crate::infrastructure::json_store::save_to_json;
use std::path::Path;
use std::sync::Arc;

#[derive(Clone)]
pub struct PublishService {
    sink: Arc<dyn DashboardSink>,
}

impl PublishService {
    pub fn new(sink: Arc<dyn DashboardSink>) -> Self {
        Self { sink }
    }

    /// Write the dashboard body to `path`. Refuses an empty dashboard.
    pub fn save_dashboard(&self, dashboard: &Dashboard, path: &Path) -> Result<(), PublishError> {
        if dashboard.is_empty() {
            tracing::warn!("No widgets to save, skipping save operation");
            return Err(PublishError::NothingToSave);
        }

        save_to_json(dashboard, path).map_err(|source| {
            tracing::error!("Failed to save dashboard: {}", source);
            PublishError::SaveFailed {
                path: path.to_path_buf(),
                source,
            }
        })?;

        tracing::info!("Dashboard Saved Successfully: {}", path.display());
        Ok(())
    }

    /// Create or replace dashboard `name` in the backend. Refuses an empty
    /// dashboard without calling the backend.
    pub async fn put_dashboard(&self, dashboard: &Dashboard, name: &str) -> Result<(), PublishError> {
        if dashboard.is_empty() {
            tracing::warn!("No widgets to upload, skipping upload operation");
            return Err(PublishError::NothingToUpload);
        }

        let upload_failed = |message: String| {
            tracing::error!("Failed to upload dashboard {}: {}", name, message);
            PublishError::UploadFailed {
                name: name.to_string(),
                message,
            }
        };

        let body = serde_json::to_string(dashboard).map_err(|e| upload_failed(e.to_string()))?;
        self.sink
            .put_dashboard(name, &body)
            .await
            .map_err(|e| upload_failed(format!("{e:#}")))?;

        tracing::info!("Dashboard Created Successfully: {}", name);
        Ok(())
    }

    /// Save to `path`, then upload as `name` when `upload` is set. The
    /// backend is never called unless the save succeeded.
    pub async fn publish(
        &self,
        dashboard: &Dashboard,
        path: &Path,
        name: &str,
        upload: bool,
    ) -> Result<(), PublishError> {
        self.save_dashboard(dashboard, path)?;

        if !upload {
            tracing::info!("Skipped uploading to CloudWatch (--no-upload flag set)");
            return Ok(());
        }

        self.put_dashboard(dashboard, name).await
    }
}
