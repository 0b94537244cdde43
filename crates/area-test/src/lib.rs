//! Area Test Harness - Generated cases and classification sweeps
//!
//! This crate provides:
//! - Seeded right and near-right triangle generation
//! - Classification sweeps over generated batches
//! - Benchmarks for construction and queries (`benches/`)

pub mod generator;
pub mod sweep;

pub use generator::*;
pub use sweep::*;
