//! Partitioning pipeline.

use super::capacity::plan_capacity;
use super::config::{PartitionConfig, Policy};
use super::fill::fill_by_score;
use super::gifted::distribute_gifted;
use super::isolate::isolate_special_ed;
use super::language::cohere_language_groups;
use super::types::{PartitionContext, PartitionReport};
use super::validate::{validate_budget, validate_schema, validate_scores, validate_table_budget};
use crate::error::PartitionResult;
use crate::roster::{Roster, Student, Table};

/// Executes the partitioning pipeline.
///
/// Phases, in order: special-education isolation, capacity planning,
/// gifted distribution, score-ranked filling, language cohesion, and
/// sequencing by class label. All validation happens before the first
/// mutation.
pub struct PartitionRunner;

impl PartitionRunner {
    /// Partitions a typed roster in place.
    ///
    /// Any existing assignments are cleared first. On error the roster is
    /// left untouched.
    pub fn run(roster: &mut Roster, config: &PartitionConfig) -> PartitionResult<PartitionReport> {
        let requested = config.requested_classes()?;
        validate_budget(roster, requested)?;
        validate_scores(roster)?;

        roster.reset();
        let mut ctx = PartitionContext::new(requested);

        let isolated = isolate_special_ed(roster, &mut ctx);
        plan_capacity(roster, &mut ctx)?;
        let gifted = distribute_gifted(roster, &mut ctx);
        let fill = fill_by_score(roster, &mut ctx);
        let language_cohorts = cohere_language_groups(roster);
        roster.sort_by_class();

        let report = PartitionReport {
            requested_classes: requested,
            target_class_size: ctx.target_size,
            isolated,
            gifted,
            fill_steps: fill.steps,
            wraps: fill.wraps,
            language_cohorts,
            class_sizes: roster.class_sizes(),
        };
        tracing::info!(
            students = roster.len(),
            classes = requested,
            target_size = report.target_class_size,
            "partitioned roster"
        );
        Ok(report)
    }

    /// Partitions a parsed table.
    ///
    /// Every input cell is preserved. The class column is added if missing
    /// (any previous contents are discarded) and rows come back ordered by
    /// class label.
    pub fn run_table(mut table: Table, config: &PartitionConfig) -> PartitionResult<Table> {
        let requested = config.requested_classes()?;
        let policy = &config.policy;
        validate_schema(&table, policy)?;
        table.check_shape()?;
        validate_table_budget(&table, policy, requested)?;

        let mut roster = extract_roster(&table, policy)?;
        Self::run(&mut roster, config)?;

        let class_col = table.ensure_column(&policy.class_column);
        let mut order = Vec::with_capacity(roster.len());
        for student in roster.students() {
            table.rows[student.id][class_col] = student
                .assigned_class
                .map(|c| c.to_string())
                .unwrap_or_default();
            order.push(student.id);
        }
        table.reorder_rows(&order);
        Ok(table)
    }
}

/// Partitions `roster` into `requested_class_count` classes using the
/// default column names and sentinels.
///
/// # Examples
///
/// ```
/// use u_classroom::partition::partition;
/// use u_classroom::roster::Table;
///
/// let mut table = Table::new(["name", "ESOL", "IEP", "GATES", "MAP_score"]);
/// for (i, score) in [95, 90, 85, 80].iter().enumerate() {
///     table.push_row([format!("s{i}"), String::new(), String::new(), "No".into(), score.to_string()]);
/// }
///
/// let out = partition(table, 2).unwrap();
/// let class = out.column_index("assigned_class").unwrap();
/// let labels: Vec<&str> = out.rows.iter().map(|r| r[class].as_str()).collect();
/// assert_eq!(labels, ["1", "1", "2", "2"]);
/// ```
pub fn partition(roster: Table, requested_class_count: i64) -> PartitionResult<Table> {
    PartitionRunner::run_table(roster, &PartitionConfig::new(requested_class_count))
}

/// Builds the typed working roster from a shape-checked table.
fn extract_roster(table: &Table, policy: &Policy) -> PartitionResult<Roster> {
    let col = |name: &str| table.column_index(name).unwrap_or_default();
    let language = col(policy.language_column.as_str());
    let special_ed = col(policy.special_ed_column.as_str());
    let gifted = col(policy.gifted_column.as_str());
    let scores = table.numeric_column(col(policy.score_column.as_str()))?;

    let students = scores
        .into_iter()
        .enumerate()
        .map(|(row, score)| Student {
            id: row,
            language_group: table.cell(row, language).map(str::to_string),
            special_ed: table.cell(row, special_ed) == Some(policy.special_ed_marker.as_str()),
            gifted: table.cell(row, gifted) == Some(policy.gifted_marker.as_str()),
            score,
            assigned_class: None,
        })
        .collect();
    Ok(Roster::new(students))
}
