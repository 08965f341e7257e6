//! Per-run state and the run report.

use std::collections::BTreeMap;

/// Mutable state threaded through the pipeline phases of one run.
///
/// Owned by a single [`PartitionRunner::run`](super::PartitionRunner::run)
/// call and dropped when it returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PartitionContext {
    /// Class count as requested by the caller.
    pub requested: u32,

    /// Classes available for balancing. One less than `requested` while a
    /// special-education class has been carved out and capacity is being
    /// planned; restored afterwards.
    pub budget: u32,

    /// Class label the next placement targets.
    pub cursor: u32,

    /// Uniform per-class capacity.
    pub target_size: usize,
}

impl PartitionContext {
    pub fn new(requested: u32) -> Self {
        Self {
            requested,
            budget: requested,
            cursor: 1,
            target_size: 0,
        }
    }
}

/// How the gifted cohort was placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GiftedPlacement {
    /// No gifted students on the roster.
    Skipped,

    /// Whole cohort in one class, topped up with high scorers.
    Single { class: u32 },

    /// Cohort split across two consecutive classes.
    TwoWay { first_class: u32 },

    /// Cohort split across three consecutive classes.
    ThreeWay { first_class: u32 },
}

/// Summary of a partitioning run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartitionReport {
    /// Validated class count.
    pub requested_classes: u32,

    /// Target class size computed by the capacity planner.
    pub target_class_size: usize,

    /// Number of students placed in the special-education class.
    pub isolated: usize,

    /// Gifted placement branch taken.
    pub gifted: GiftedPlacement,

    /// Number of fill steps performed.
    pub fill_steps: usize,

    /// How many times the class cursor wrapped back to the middle.
    pub wraps: usize,

    /// Number of language cohorts re-homed.
    pub language_cohorts: usize,

    /// Final students per class label.
    pub class_sizes: BTreeMap<u32, usize>,
}
