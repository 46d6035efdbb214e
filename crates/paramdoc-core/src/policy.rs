//! Pipeline policies.
//!
//! Whether an annotated field without a `name` is skipped or rejected is a
//! configuration decision, made separately for each pipeline.

use serde::{Deserialize, Serialize};

/// What to do with an annotated field whose `name` is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyNamePolicy {
    /// Ignore the field.
    Skip,
    /// Fail with `EmptyName`.
    Reject,
}

/// Options for the decode pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    /// Handling of annotated fields without a name. Defaults to
    /// [`EmptyNamePolicy::Skip`].
    pub empty_name: EmptyNamePolicy,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            empty_name: EmptyNamePolicy::Skip,
        }
    }
}

/// Options for the describe pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeOptions {
    /// Handling of annotated fields without a name. Defaults to
    /// [`EmptyNamePolicy::Reject`].
    pub empty_name: EmptyNamePolicy,
}

impl Default for DescribeOptions {
    fn default() -> Self {
        Self {
            empty_name: EmptyNamePolicy::Reject,
        }
    }
}
