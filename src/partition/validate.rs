//! Up-front input checks. Nothing here mutates its input.

use super::config::Policy;
use crate::error::{PartitionError, PartitionResult, ValidationError};
use crate::roster::{Roster, Table};

/// Fails if any of the policy's required columns is missing from the header row.
pub fn validate_schema(table: &Table, policy: &Policy) -> Result<(), ValidationError> {
    let missing = table.missing_columns(&policy.required_columns());
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingFields { fields: missing })
    }
}

/// Fails when isolating special-education students would leave no class
/// for everyone else.
pub fn validate_budget(roster: &Roster, requested: u32) -> Result<(), ValidationError> {
    check_budget(roster.has_special_ed(), requested)
}

/// Same check as [`validate_budget`], reading only the special-education
/// column so it can run before scores are parsed.
pub fn validate_table_budget(
    table: &Table,
    policy: &Policy,
    requested: u32,
) -> Result<(), ValidationError> {
    let Some(col) = table.column_index(&policy.special_ed_column) else {
        return Ok(());
    };
    let marker = policy.special_ed_marker.as_str();
    let has_special_ed = (0..table.len()).any(|row| table.cell(row, col) == Some(marker));
    check_budget(has_special_ed, requested)
}

fn check_budget(has_special_ed: bool, requested: u32) -> Result<(), ValidationError> {
    if requested <= 1 && has_special_ed {
        return Err(ValidationError::DegenerateBudget);
    }
    Ok(())
}

/// Fails on the first student whose score is not a finite number.
pub fn validate_scores(roster: &Roster) -> PartitionResult<()> {
    match roster.students().iter().find(|s| !s.score.is_finite()) {
        Some(s) => Err(PartitionError::MalformedScore {
            row: s.id,
            column: "score".into(),
            value: s.score.to_string(),
        }),
        None => Ok(()),
    }
}
