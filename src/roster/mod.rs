//! Student roster model.
//!
//! Two views of the same data:
//!
//! - [`Table`]: the schema-bearing grid of string cells handed over by
//!   whatever parsed the uploaded file. Column order and every cell are
//!   preserved end to end.
//! - [`Roster`]: the typed working table the partitioner mutates. Class
//!   membership is never stored separately; it is always derived from the
//!   `assigned_class` of each [`Student`].
//!
//! The composite MAP score helper lives here as well, since it only
//! rewrites a table column.

mod score;
mod table;
mod types;

pub use score::{add_composite_score, composite_score, MATH_COLUMN, READING_COLUMN};
pub use table::Table;
pub use types::{Roster, Student};
