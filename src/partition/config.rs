//! Partitioner configuration and placement policy.

use crate::error::ValidationError;

/// Largest class count accepted by default.
pub const DEFAULT_MAX_CLASSES: i64 = 20;

/// Column names and flag sentinels of the roster schema.
///
/// Defaults match the upload format: `ESOL`, `IEP`, `GATES`, `MAP_score`,
/// with `"SPED"` marking special education and `"Yes"` marking gifted.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Policy {
    /// Language-learner group column. Empty cell = not a language learner.
    pub language_column: String,

    /// Special-education designation column.
    pub special_ed_column: String,

    /// Gifted designation column.
    pub gifted_column: String,

    /// Numeric score column used for ranking.
    pub score_column: String,

    /// Output column receiving the class label.
    pub class_column: String,

    /// Cell value marking a special-education student.
    pub special_ed_marker: String,

    /// Cell value marking a gifted student.
    pub gifted_marker: String,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            language_column: "ESOL".into(),
            special_ed_column: "IEP".into(),
            gifted_column: "GATES".into(),
            score_column: "MAP_score".into(),
            class_column: "assigned_class".into(),
            special_ed_marker: "SPED".into(),
            gifted_marker: "Yes".into(),
        }
    }
}

impl Policy {
    /// The four columns a roster must carry, in reporting order.
    pub fn required_columns(&self) -> [&str; 4] {
        [
            self.language_column.as_str(),
            self.special_ed_column.as_str(),
            self.gifted_column.as_str(),
            self.score_column.as_str(),
        ]
    }

    pub fn with_language_column(mut self, name: impl Into<String>) -> Self {
        self.language_column = name.into();
        self
    }

    pub fn with_special_ed_column(mut self, name: impl Into<String>) -> Self {
        self.special_ed_column = name.into();
        self
    }

    pub fn with_gifted_column(mut self, name: impl Into<String>) -> Self {
        self.gifted_column = name.into();
        self
    }

    pub fn with_score_column(mut self, name: impl Into<String>) -> Self {
        self.score_column = name.into();
        self
    }

    pub fn with_class_column(mut self, name: impl Into<String>) -> Self {
        self.class_column = name.into();
        self
    }

    pub fn with_special_ed_marker(mut self, marker: impl Into<String>) -> Self {
        self.special_ed_marker = marker.into();
        self
    }

    pub fn with_gifted_marker(mut self, marker: impl Into<String>) -> Self {
        self.gifted_marker = marker.into();
        self
    }
}

/// Configuration for one partitioning run.
///
/// # Examples
///
/// ```
/// use u_classroom::partition::{PartitionConfig, Policy};
///
/// let config = PartitionConfig::new(4)
///     .with_policy(Policy::default().with_score_column("composite"));
/// assert!(config.validate().is_ok());
/// assert!(PartitionConfig::new(21).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PartitionConfig {
    /// Requested number of classes.
    ///
    /// Signed so that out-of-range input from a form field can be
    /// represented and rejected rather than wrapped.
    pub class_count: i64,

    /// Upper bound for `class_count` (inclusive).
    pub max_classes: i64,

    /// Schema and sentinels.
    pub policy: Policy,
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            class_count: 1,
            max_classes: DEFAULT_MAX_CLASSES,
            policy: Policy::default(),
        }
    }
}

impl PartitionConfig {
    pub fn new(class_count: i64) -> Self {
        Self {
            class_count,
            ..Self::default()
        }
    }

    pub fn with_class_count(mut self, n: i64) -> Self {
        self.class_count = n;
        self
    }

    pub fn with_max_classes(mut self, n: i64) -> Self {
        self.max_classes = n;
        self
    }

    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// Validates the requested class count against `[1, max_classes]`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.requested_classes().map(|_| ())
    }

    /// The validated class count.
    pub fn requested_classes(&self) -> Result<u32, ValidationError> {
        let invalid = ValidationError::InvalidClassCount {
            count: self.class_count,
            max: self.max_classes,
        };
        if self.class_count < 1 || self.class_count > self.max_classes {
            return Err(invalid);
        }
        u32::try_from(self.class_count).map_err(|_| invalid)
    }
}
