// Main entry point - Dependency injection and the generate/save/upload flow
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use clap::Parser;

use crate::application::dashboard_service::DashboardAssembler;
use crate::application::metric_resolver::MetricResolver;
use crate::application::publish_service::PublishService;
use crate::domain::target::ResourceTarget;
use crate::infrastructure::cloudwatch_repository::CloudWatchRepository;
use crate::infrastructure::config::load_generator_config;
use crate::infrastructure::logging::init_tracing;
use crate::presentation::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration and initialize tracing
    let settings = load_generator_config()?;
    init_tracing(&settings.log_file)?;

    let target = ResourceTarget::new(cli.region, cli.namespace, cli.name);

    // Create repository (infrastructure layer)
    let repository = Arc::new(CloudWatchRepository::connect(&target.region).await);

    // Create services (application layer)
    let resolver = MetricResolver::new(repository.clone());
    let publisher = PublishService::new(repository);
    let csv_path = cli
        .csv
        .unwrap_or_else(|| settings.recommended_csv(&target.namespace));
    let mut assembler = DashboardAssembler::new(resolver, target, settings.period);

    assembler.assemble_file(&csv_path).await?;

    let dashboard_name = cli
        .dashboard_name
        .unwrap_or_else(|| assembler.dashboard_name().to_string());
    let dashboard = assembler.finish();

    let output = cli.output.unwrap_or(settings.output);
    publisher
        .publish(&dashboard, &output, &dashboard_name, !cli.no_upload)
        .await?;
    Ok(())
}
