//! Report generation and output formatting

pub mod report;
pub mod formatter;
