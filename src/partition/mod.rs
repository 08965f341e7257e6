//! Constraint-aware class partitioning.
//!
//! Assigns every student on a roster to one of a requested number of
//! classes. The pipeline is a fixed sequence of deterministic phases
//! sharing one working roster and a small per-run context:
//!
//! 1. **Validation**: class count in range, required columns present, a
//!    non-degenerate budget, and finite scores. Runs before anything is
//!    written.
//! 2. **Special-education isolation**: all flagged students go to class 1,
//!    which is then excluded from capacity planning.
//! 3. **Capacity planning**: uniform target size from the remaining
//!    students and classes.
//! 4. **Gifted distribution**: the gifted cohort lands in one, two or three
//!    classes depending on its size relative to the target.
//! 5. **Score filling**: remaining students are dealt out by descending
//!    score, with a wrap-around to the middle class when the cursor runs
//!    past the last class.
//! 6. **Language cohesion**: each language-learner cohort is pulled into
//!    the rounded mean of its members' classes, overriding balance.
//! 7. **Sequencing**: rows are stably ordered by class label.
//!
//! Class membership is never cached: occupancy and the unassigned set are
//! queried from the roster at each step.

mod capacity;
mod config;
mod fill;
mod gifted;
mod isolate;
mod language;
mod runner;
mod types;
mod validate;

pub use config::{PartitionConfig, Policy, DEFAULT_MAX_CLASSES};
pub use gifted::THREE_WAY_THRESHOLD;
pub use runner::{partition, PartitionRunner};
pub use types::{GiftedPlacement, PartitionReport};
pub use validate::{validate_budget, validate_schema, validate_scores, validate_table_budget};

#[cfg(test)]
mod proptests;
