//! Constraint-aware class partitioning.
//!
//! Splits a single-term student roster into a requested number of classes,
//! balancing academic scores while honoring placement policies:
//!
//! - **Special-education isolation**: flagged students share a dedicated
//!   class.
//! - **Gifted distribution**: gifted students are spread over one to three
//!   classes depending on cohort size.
//! - **Score balancing**: everyone else is dealt out by descending score
//!   up to a uniform target class size.
//! - **Language cohesion**: each language-learner cohort ends up in a
//!   single class, even at the cost of balance.
//!
//! The algorithm is a deterministic heuristic, not an optimizer: the same
//! roster and class count always produce the same assignment.
//!
//! # Architecture
//!
//! - [`roster`]: typed working roster and the string [`Table`](roster::Table)
//!   exchanged with file readers and writers.
//! - [`partition`]: configuration, the phase pipeline and the
//!   [`partition()`](partition::partition) entry point.
//! - [`error`]: validation versus internal failures.
//!
//! Parsing and writing delimited files, storage and transport are left to
//! callers.

pub mod error;
pub mod partition;
pub mod roster;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{PartitionError, PartitionResult, ValidationError};
