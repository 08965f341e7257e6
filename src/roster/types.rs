//! Typed student records and the working roster.

use std::cmp::Ordering;
use std::collections::BTreeMap;

/// One row of the working table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Student {
    /// Source row index. Stable across the whole pipeline.
    pub id: usize,

    /// Language-learner cohort tag. `None` means not a language learner.
    pub language_group: Option<String>,

    /// Special-education designation.
    pub special_ed: bool,

    /// Academically gifted designation.
    pub gifted: bool,

    /// Academic performance score used for ranking.
    pub score: f64,

    /// Class label, 1-based. The only field the partitioner writes.
    pub assigned_class: Option<u32>,
}

impl Student {
    /// Creates an unassigned student with no designations.
    pub fn new(id: usize, score: f64) -> Self {
        Self {
            id,
            language_group: None,
            special_ed: false,
            gifted: false,
            score,
            assigned_class: None,
        }
    }

    pub fn with_language(mut self, group: impl Into<String>) -> Self {
        self.language_group = Some(group.into());
        self
    }

    pub fn with_special_ed(mut self, special_ed: bool) -> Self {
        self.special_ed = special_ed;
        self
    }

    pub fn with_gifted(mut self, gifted: bool) -> Self {
        self.gifted = gifted;
        self
    }
}

/// Ordered collection of students, in source order until sequenced.
///
/// Every query (unassigned set, class occupancy) is recomputed from the
/// records on each call, so a mutation is visible to the very next check.
///
/// # Examples
///
/// ```
/// use u_classroom::roster::{Roster, Student};
///
/// let mut roster = Roster::new(vec![
///     Student::new(0, 70.0),
///     Student::new(1, 90.0),
///     Student::new(2, 80.0),
/// ]);
/// assert_eq!(roster.unassigned_by_score(), vec![1, 2, 0]);
///
/// roster.assign(&[1], 1);
/// assert_eq!(roster.occupancy(1), 1);
/// assert_eq!(roster.unassigned_by_score(), vec![2, 0]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    pub fn new(students: Vec<Student>) -> Self {
        Self { students }
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn into_students(self) -> Vec<Student> {
        self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Sets `assigned_class` for the students at the given positions.
    pub fn assign(&mut self, positions: &[usize], class: u32) {
        for &pos in positions {
            self.students[pos].assigned_class = Some(class);
        }
    }

    /// Clears every assignment.
    pub fn reset(&mut self) {
        for s in &mut self.students {
            s.assigned_class = None;
        }
    }

    /// Positions of unassigned students, highest score first.
    ///
    /// The sort is stable: equal scores keep roster order.
    pub fn unassigned_by_score(&self) -> Vec<usize> {
        let mut positions: Vec<usize> = self
            .students
            .iter()
            .enumerate()
            .filter(|(_, s)| s.assigned_class.is_none())
            .map(|(i, _)| i)
            .collect();
        positions.sort_by(|&a, &b| {
            self.students[b]
                .score
                .partial_cmp(&self.students[a].score)
                .unwrap_or(Ordering::Equal)
        });
        positions
    }

    pub fn unassigned_count(&self) -> usize {
        self.students
            .iter()
            .filter(|s| s.assigned_class.is_none())
            .count()
    }

    /// Number of students currently labelled `class`.
    pub fn occupancy(&self, class: u32) -> usize {
        self.students
            .iter()
            .filter(|s| s.assigned_class == Some(class))
            .count()
    }

    /// Students per class label, ascending by label.
    pub fn class_sizes(&self) -> BTreeMap<u32, usize> {
        let mut sizes = BTreeMap::new();
        for class in self.students.iter().filter_map(|s| s.assigned_class) {
            *sizes.entry(class).or_insert(0) += 1;
        }
        sizes
    }

    pub fn has_special_ed(&self) -> bool {
        self.students.iter().any(|s| s.special_ed)
    }

    pub fn has_gifted(&self) -> bool {
        self.students.iter().any(|s| s.gifted)
    }

    pub fn is_fully_assigned(&self) -> bool {
        self.students.iter().all(|s| s.assigned_class.is_some())
    }

    /// Stable sort by class label; unassigned rows go last.
    pub(crate) fn sort_by_class(&mut self) {
        self.students
            .sort_by_key(|s| (s.assigned_class.is_none(), s.assigned_class));
    }
}
