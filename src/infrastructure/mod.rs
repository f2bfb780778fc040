// Infrastructure layer - External dependencies and adapters
pub mod cloudwatch_repository;
pub mod config;
pub mod json_store;
pub mod logging;
