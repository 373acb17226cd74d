//! Adapters at the edges: CSV table loading and report output.

pub mod csv;
pub mod report_writer;
pub mod summary_writer;
