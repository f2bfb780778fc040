// Application layer - Use cases and the backend traits they depend on
pub mod dashboard_service;
pub mod error;
pub mod metric_catalog;
pub mod metric_resolver;
pub mod publish_service;
