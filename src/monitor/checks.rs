//! The reliability monitor and its check operations.

use std::collections::{HashMap, HashSet};

use arrow::{
    array::{
        Array, BooleanArray, Float32Array, Float64Array, Int16Array, Int32Array, Int64Array,
        Int8Array, StringArray, UInt16Array, UInt32Array, UInt64Array, UInt8Array,
    },
    datatypes::DataType,
    util::display::array_value_to_string,
};

use super::{report::ReliabilityReport, stats};
use crate::dataset::{ArrowDataset, Dataset};

/// Data reliability monitor over a borrowed dataset.
///
/// Holds an immutable reference to an [`ArrowDataset`] and exposes three
/// independent check operations plus [`Self::summary_report`], which runs
/// all three and merges their results. Every operation is a pure read;
/// the dataset is never mutated and the monitor keeps no state of its
/// own.
///
/// Empty datasets are accepted: every check degrades to a zero-valued or
/// empty result rather than failing.
#[derive(Debug, Clone, Copy)]
pub struct ReliabilityMonitor<'a> {
    dataset: &'a ArrowDataset,
}

impl<'a> ReliabilityMonitor<'a> {
    /// Creates a monitor over the given dataset.
    pub fn new(dataset: &'a ArrowDataset) -> Self {
        Self { dataset }
    }

    /// Returns the dataset under observation.
    pub fn dataset(&self) -> &'a ArrowDataset {
        self.dataset
    }

    /// Counts null entries per column.
    ///
    /// Returns one entry for every column in the schema, numeric or not.
    /// Each count is in `[0, row_count]`.
    pub fn check_missing_values(&self) -> HashMap<String, usize> {
        let schema = self.dataset.schema();
        let mut missing: HashMap<String, usize> = schema
            .fields()
            .iter()
            .map(|f| (f.name().clone(), 0))
            .collect();

        for batch in self.dataset.batches() {
            for (idx, field) in schema.fields().iter().enumerate() {
                if let Some(count) = missing.get_mut(field.name()) {
                    *count += batch.column(idx).null_count();
                }
            }
        }

        missing
    }

    /// Counts rows that exactly repeat an earlier row.
    ///
    /// A row is a duplicate when some earlier row (in original order) has
    /// identical values in every column; the first occurrence is never
    /// counted. A null cell matches another null cell in the same column
    /// and nothing else.
    pub fn check_duplicate_rows(&self) -> usize {
        let num_columns = self.dataset.schema().fields().len();
        if num_columns == 0 {
            return 0;
        }

        let mut seen: HashSet<Vec<Option<String>>> = HashSet::new();
        let mut duplicates = 0;

        for batch in self.dataset.batches() {
            for row in 0..batch.num_rows() {
                let key: Vec<Option<String>> = (0..num_columns)
                    .map(|col| render_cell(batch.column(col).as_ref(), row))
                    .collect();

                if !seen.insert(key) {
                    duplicates += 1;
                }
            }
        }

        duplicates
    }

    /// Counts IQR outliers per numeric column.
    ///
    /// Returns one entry for every numeric column (see [`is_numeric`]);
    /// non-numeric columns do not appear as keys. Per column, Q1 and Q3
    /// are computed over the non-missing values by linear interpolation,
    /// and values strictly outside `[Q1 - 1.5 * IQR, Q3 + 1.5 * IQR]`
    /// are counted. Nulls and non-finite floats are excluded from both
    /// the quantiles and the count; a column with no usable values
    /// reports 0.
    pub fn detect_outliers_iqr(&self) -> HashMap<String, usize> {
        let schema = self.dataset.schema();
        let mut outliers = HashMap::new();

        for (idx, field) in schema.fields().iter().enumerate() {
            if !is_numeric(field.data_type()) {
                continue;
            }

            let mut values: Vec<f64> = Vec::new();
            for batch in self.dataset.batches() {
                collect_numeric(batch.column(idx).as_ref(), &mut values);
            }
            values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

            let count = match stats::iqr_fences(&values) {
                Some((lower, upper)) => values.iter().filter(|&&v| v < lower || v > upper).count(),
                // Quantiles are undefined with no usable values
                None => 0,
            };

            outliers.insert(field.name().clone(), count);
        }

        outliers
    }

    /// Runs all three checks and merges their results.
    ///
    /// Deterministic for a fixed dataset: calling it twice on the same
    /// unmutated dataset yields identical reports.
    pub fn summary_report(&self) -> ReliabilityReport {
        ReliabilityReport {
            missing_values: self.check_missing_values(),
            duplicate_rows: self.check_duplicate_rows(),
            outliers_iqr: self.detect_outliers_iqr(),
        }
    }
}

/// Explicit predicate for columns eligible for IQR outlier detection.
///
/// Signed and unsigned integers plus 32/64-bit floats. Booleans,
/// temporals, and numbers stored as text are not numeric for this
/// purpose.
pub fn is_numeric(data_type: &DataType) -> bool {
    matches!(
        data_type,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Renders one cell to a comparable string, `None` for null.
fn render_cell(array: &dyn Array, idx: usize) -> Option<String> {
    if array.is_null(idx) {
        return None;
    }

    let rendered = if let Some(arr) = array.as_any().downcast_ref::<StringArray>() {
        arr.value(idx).to_string()
    } else if let Some(arr) = array.as_any().downcast_ref::<Int32Array>() {
        arr.value(idx).to_string()
    } else if let Some(arr) = array.as_any().downcast_ref::<Int64Array>() {
        arr.value(idx).to_string()
    } else if let Some(arr) = array.as_any().downcast_ref::<Float64Array>() {
        arr.value(idx).to_string()
    } else if let Some(arr) = array.as_any().downcast_ref::<Float32Array>() {
        arr.value(idx).to_string()
    } else if let Some(arr) = array.as_any().downcast_ref::<BooleanArray>() {
        arr.value(idx).to_string()
    } else {
        // Temporal, categorical, and remaining types go through arrow's
        // formatter so distinct values stay distinct
        array_value_to_string(array, idx).unwrap_or_else(|_| "?".to_string())
    };

    Some(rendered)
}

/// Appends the non-missing values of a numeric array as f64.
///
/// Non-finite floats are treated as missing.
fn collect_numeric(array: &dyn Array, values: &mut Vec<f64>) {
    macro_rules! extend_from {
        ($array_ty:ty) => {
            if let Some(arr) = array.as_any().downcast_ref::<$array_ty>() {
                #[allow(clippy::cast_lossless, clippy::cast_precision_loss)]
                values.extend(arr.iter().flatten().map(|v| v as f64));
                return;
            }
        };
    }

    extend_from!(Int8Array);
    extend_from!(Int16Array);
    extend_from!(Int32Array);
    extend_from!(Int64Array);
    extend_from!(UInt8Array);
    extend_from!(UInt16Array);
    extend_from!(UInt32Array);
    extend_from!(UInt64Array);

    if let Some(arr) = array.as_any().downcast_ref::<Float32Array>() {
        values.extend(
            arr.iter()
                .flatten()
                .map(f64::from)
                .filter(|v| v.is_finite()),
        );
        return;
    }
    if let Some(arr) = array.as_any().downcast_ref::<Float64Array>() {
        values.extend(arr.iter().flatten().filter(|v| v.is_finite()));
    }
}
