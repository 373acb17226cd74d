//! Application layer containing the reconciliation engine.
//!
//! This module defines the `ReconciliationEngine`, which runs the fixed
//! battery of cross-entity checks against a snapshot port and assembles the
//! validation report.

pub mod engine;
