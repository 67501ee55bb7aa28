//! fiable - Data Reliability Monitoring for Arrow Tabular Datasets
//!
//! Computes basic data-quality diagnostics over an in-memory table:
//! missing-value counts per column, duplicate-row counts, and numeric
//! outlier counts via the interquartile-range (IQR) method, combined
//! into a single summary report.
//!
//! # Design Principles
//!
//! 1. **Pure reads** - the monitor borrows the dataset immutably and
//!    never mutates it
//! 2. **Deterministic** - quantiles use a documented linear-interpolation
//!    definition, independent of any table library's default
//! 3. **Ecosystem aligned** - Arrow 53, Parquet 53
//!
//! # Quick Start
//!
//! ```no_run
//! use fiable::{ArrowDataset, ReliabilityMonitor};
//!
//! let dataset = ArrowDataset::from_csv("data/train.csv").unwrap();
//!
//! let monitor = ReliabilityMonitor::new(&dataset);
//! let report = monitor.summary_report();
//!
//! println!("{} duplicate rows", report.duplicate_rows);
//! for (column, count) in &report.outliers_iqr {
//!     println!("{column}: {count} outliers");
//! }
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
// Allow common test patterns
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::cast_lossless,
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::float_cmp,
        clippy::unreadable_literal
    )
)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::map_unwrap_or)]

pub mod dataset;
pub mod error;
pub mod monitor;

// Re-exports for convenience
// Re-export arrow types commonly needed
pub use arrow::{
    array::RecordBatch,
    datatypes::{Schema, SchemaRef},
};
pub use dataset::{ArrowDataset, CsvOptions, Dataset};
pub use error::{Error, Result};
pub use monitor::{ReliabilityMonitor, ReliabilityReport};
