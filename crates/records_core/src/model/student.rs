//! Student entity.
//!
//! # Invariants
//! - `id` and `name` are never blank, both after construction and after any
//!   successful setter call.

use crate::model::validation::{require_non_blank, ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Validated student record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StudentRecord")]
pub struct Student {
    id: String,
    name: String,
}

/// Unvalidated wire shape; converted through [`Student::new`].
#[derive(Deserialize)]
struct StudentRecord {
    id: String,
    name: String,
}

impl TryFrom<StudentRecord> for Student {
    type Error = ValidationError;

    fn try_from(value: StudentRecord) -> Result<Self, Self::Error> {
        Self::new(value.id, value.name)
    }
}

impl Student {
    /// Creates a student after checking both fields.
    ///
    /// # Errors
    /// - `ValidationError::EmptyField` when `id` or `name` is blank.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> ValidationResult<Self> {
        Ok(Self {
            id: require_non_blank("student_id", id.into())?,
            name: require_non_blank("student_name", name.into())?,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the id; the student is unchanged on error.
    pub fn set_id(&mut self, id: impl Into<String>) -> ValidationResult<()> {
        self.id = require_non_blank("student_id", id.into())?;
        Ok(())
    }

    /// Replaces the name; the student is unchanged on error.
    pub fn set_name(&mut self, name: impl Into<String>) -> ValidationResult<()> {
        self.name = require_non_blank("student_name", name.into())?;
        Ok(())
    }
}

impl Display for Student {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.id, self.name)
    }
}
