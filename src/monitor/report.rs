//! Summary report assembled from the reliability checks.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Combined result of the three reliability checks.
///
/// Produced by [`crate::ReliabilityMonitor::summary_report`]. The report
/// is a plain value; any presentation layer (printing, JSON export,
/// dashboards) consumes it externally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReliabilityReport {
    /// Count of null entries per column, covering all columns.
    pub missing_values: HashMap<String, usize>,
    /// Number of rows that exactly repeat an earlier row.
    pub duplicate_rows: usize,
    /// Count of IQR outliers per numeric column. Non-numeric columns
    /// are not present as keys.
    pub outliers_iqr: HashMap<String, usize>,
}

impl ReliabilityReport {
    /// Total number of missing cells across all columns.
    pub fn total_missing_cells(&self) -> usize {
        self.missing_values.values().sum()
    }

    /// Total number of outliers across all numeric columns.
    pub fn total_outliers(&self) -> usize {
        self.outliers_iqr.values().sum()
    }

    /// Returns true if no check found anything to flag.
    pub fn is_clean(&self) -> bool {
        self.duplicate_rows == 0 && self.total_missing_cells() == 0 && self.total_outliers() == 0
    }
}
