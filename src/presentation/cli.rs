// Command line arguments
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "generator",
    version,
    about = "CloudWatch Dashboard Generator - Generate CloudWatch Dashboard from CSV",
    after_help = "Examples:\n  \
        generator --region us-east-1 --name cluster-01 --namespace AWS/Kafka\n  \
        generator --region us-east-1 --name cluster-01 --namespace AWS/ES --dashboard-name my-es-dashboard --output dashboard.json\n  \
        generator --region us-east-1 --name cluster-01 --namespace AWS/Kafka --no-upload"
)]
pub struct Cli {
    /// AWS region (e.g., us-east-1, ap-east-1)
    #[arg(long)]
    pub region: String,

    /// Resource name (e.g., cluster-01)
    #[arg(long)]
    pub name: String,

    /// CloudWatch namespace (e.g., AWS/Kafka, AWS/EC2)
    #[arg(long)]
    pub namespace: String,

    /// CSV file path (default: the recommended metrics CSV for the namespace)
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Output file path (default: dashboard.json)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Custom dashboard name (default: auto-generated)
    #[arg(long)]
    pub dashboard_name: Option<String>,

    /// Do not upload to CloudWatch
    #[arg(long)]
    pub no_upload: bool,
}
