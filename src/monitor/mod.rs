//! Data reliability monitoring
//!
//! Detects basic data-quality issues in a tabular dataset: missing
//! values per column, duplicate rows, and numeric outliers via the
//! interquartile-range (IQR) method.
//!
//! All checks are pure reads over a borrowed [`crate::ArrowDataset`];
//! each runs independently and [`ReliabilityMonitor::summary_report`]
//! merges the three results into one [`ReliabilityReport`].
//!
//! # Example
//!
//! ```ignore
//! use fiable::{ArrowDataset, ReliabilityMonitor};
//!
//! let monitor = ReliabilityMonitor::new(&dataset);
//!
//! let report = monitor.summary_report();
//! if !report.is_clean() {
//!     println!("{} duplicate rows", report.duplicate_rows);
//! }
//! ```

// Statistical computation and internal methods
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::suboptimal_flops)]

mod checks;
mod report;
mod stats;


pub use checks::{is_numeric, ReliabilityMonitor};
pub use report::ReliabilityReport;
