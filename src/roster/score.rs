//! Composite MAP score.

use super::table::Table;
use crate::error::{PartitionResult, ValidationError};

pub const MATH_COLUMN: &str = "math_score";
pub const READING_COLUMN: &str = "reading_score";

/// Mean of the math and reading scores, rounded half to even.
pub fn composite_score(math: f64, reading: f64) -> f64 {
    ((math + reading) / 2.0).round_ties_even()
}

/// Writes `score_column` as the composite of the math and reading columns.
///
/// The column is created if the table does not have it yet; existing
/// values are overwritten.
pub fn add_composite_score(table: &mut Table, score_column: &str) -> PartitionResult<()> {
    let missing = table.missing_columns(&[MATH_COLUMN, READING_COLUMN]);
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields { fields: missing }.into());
    }
    table.check_shape()?;

    // Columns were checked above.
    let math_idx = table.column_index(MATH_COLUMN).unwrap_or_default();
    let reading_idx = table.column_index(READING_COLUMN).unwrap_or_default();
    let math = table.numeric_column(math_idx)?;
    let reading = table.numeric_column(reading_idx)?;

    let out = table.ensure_column(score_column);
    for (row, (m, r)) in table.rows.iter_mut().zip(math.iter().zip(&reading)) {
        row[out] = composite_score(*m, *r).to_string();
    }
    tracing::debug!(rows = table.len(), column = score_column, "computed composite scores");
    Ok(())
}
