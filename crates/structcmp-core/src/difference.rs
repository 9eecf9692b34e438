//! The value returned when two graphs diverge.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{Result, StructCmpError};

/// Description of the first point where two graphs diverge.
///
/// Equality and hashing use only the description, so two differences found
/// independently at the same place with the same values are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Difference {
    description: String,
}

impl Difference {
    /// Create a difference with the given description, stored verbatim.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }

    /// Create a difference from a description that may be absent.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `description` is `None`.
    pub fn try_from_description(description: Option<String>) -> Result<Self> {
        description
            .map(Self::new)
            .ok_or_else(|| StructCmpError::InvalidArgument {
                argument: "description".to_string(),
                reason: "a difference requires a description".to_string(),
            })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn into_description(self) -> String {
        self.description
    }
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

impl From<Difference> for String {
    fn from(difference: Difference) -> Self {
        difference.description
    }
}

impl TryFrom<Option<String>> for Difference {
    type Error = StructCmpError;

    fn try_from(description: Option<String>) -> Result<Self> {
        Self::try_from_description(description)
    }
}
