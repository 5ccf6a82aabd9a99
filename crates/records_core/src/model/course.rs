//! Course entity.
//!
//! # Invariants
//! - `id` and `name` are never blank.
//! - `credits` is strictly positive.

use crate::model::validation::{
    require_non_blank, require_positive, ValidationError, ValidationResult,
};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Validated course record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CourseRecord")]
pub struct Course {
    id: String,
    name: String,
    credits: i32,
}

#[derive(Deserialize)]
struct CourseRecord {
    id: String,
    name: String,
    credits: i32,
}

impl TryFrom<CourseRecord> for Course {
    type Error = ValidationError;

    fn try_from(value: CourseRecord) -> Result<Self, Self::Error> {
        Self::new(value.id, value.name, value.credits)
    }
}

impl Course {
    /// Creates a course after checking every field.
    ///
    /// # Errors
    /// - `ValidationError::EmptyField` when `id` or `name` is blank.
    /// - `ValidationError::OutOfDomain` when `credits <= 0`.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        credits: i32,
    ) -> ValidationResult<Self> {
        Ok(Self {
            id: require_non_blank("course_id", id.into())?,
            name: require_non_blank("course_name", name.into())?,
            credits: require_positive("credits", credits)?,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn credits(&self) -> i32 {
        self.credits
    }

    pub fn set_id(&mut self, id: impl Into<String>) -> ValidationResult<()> {
        self.id = require_non_blank("course_id", id.into())?;
        Ok(())
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> ValidationResult<()> {
        self.name = require_non_blank("course_name", name.into())?;
        Ok(())
    }

    pub fn set_credits(&mut self, credits: i32) -> ValidationResult<()> {
        self.credits = require_positive("credits", credits)?;
        Ok(())
    }
}

impl Display for Course {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {} ({} credits)", self.id, self.name, self.credits)
    }
}
