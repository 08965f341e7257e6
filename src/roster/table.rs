//! Schema-bearing string table.

use crate::error::{PartitionError, PartitionResult};

/// A parsed delimited-text grid: one header row plus data rows.
///
/// Cells are kept as text exactly as read. Only an empty cell is treated
/// as an absent value; flag and group matching compare the text verbatim.
///
/// # Examples
///
/// ```
/// use u_classroom::roster::Table;
///
/// let mut table = Table::new(["name", "MAP_score"]);
/// table.push_row(["Ana", "91"]);
/// assert_eq!(table.column_index("MAP_score"), Some(1));
/// assert_eq!(table.missing_columns(&["name", "IEP"]), vec!["IEP".to_string()]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates an empty table with the given header row.
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a data row.
    pub fn push_row<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Names from `required` that are not in the header row, in the order given.
    pub fn missing_columns(&self, required: &[&str]) -> Vec<String> {
        required
            .iter()
            .filter(|name| self.column_index(name).is_none())
            .map(|name| name.to_string())
            .collect()
    }

    /// Cell text at (`row`, `col`), untrimmed. `None` when the cell is empty.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .filter(|c| !c.is_empty())
    }

    /// Checks that every row has exactly one cell per header.
    pub fn check_shape(&self) -> PartitionResult<()> {
        let expected = self.headers.len();
        for (row, cells) in self.rows.iter().enumerate() {
            if cells.len() != expected {
                return Err(PartitionError::RaggedRow {
                    row,
                    expected,
                    found: cells.len(),
                });
            }
        }
        Ok(())
    }

    /// Returns the index of `name`, appending an empty column if absent.
    pub fn ensure_column(&mut self, name: &str) -> usize {
        if let Some(idx) = self.column_index(name) {
            return idx;
        }
        self.headers.push(name.to_string());
        for row in &mut self.rows {
            row.push(String::new());
        }
        self.headers.len() - 1
    }

    /// Parses a whole column as finite numbers.
    ///
    /// Surrounding whitespace is ignored. Fails on the first empty or
    /// non-numeric cell.
    pub fn numeric_column(&self, col: usize) -> PartitionResult<Vec<f64>> {
        let column = self.headers.get(col).cloned().unwrap_or_default();
        (0..self.rows.len())
            .map(|row| {
                let raw = self.cell(row, col).unwrap_or("");
                raw.trim()
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| PartitionError::MalformedScore {
                        row,
                        column: column.clone(),
                        value: raw.to_string(),
                    })
            })
            .collect()
    }

    /// Keeps only the rows whose original positions appear in `order`,
    /// in that order.
    pub(crate) fn reorder_rows(&mut self, order: &[usize]) {
        let mut taken: Vec<Option<Vec<String>>> = self.rows.drain(..).map(Some).collect();
        self.rows = order.iter().filter_map(|&i| taken[i].take()).collect();
    }
}
