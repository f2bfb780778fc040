// Error types for dashboard generation and publishing
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("failed to read metrics CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("metric catalog lookup failed for {metric_name}: {message}")]
    Catalog { metric_name: String, message: String },
}

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("no widgets to save, please check if the configuration is correct")]
    NothingToSave,

    #[error("failed to save dashboard to {}: {source}", .path.display())]
    SaveFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no widgets to upload")]
    NothingToUpload,

    #[error("failed to upload dashboard {name}: {message}")]
    UploadFailed { name: String, message: String },
}
