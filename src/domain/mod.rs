// Domain layer - Pure dashboard types and rules
pub mod dashboard;
pub mod layout;
pub mod metric;
pub mod row_spec;
pub mod statistic;
pub mod target;
pub mod validators;
