//! Enrollment entity linking a student id to a course id.
//!
//! # Responsibility
//! - Record that a student enrolled in a course on a calendar date.
//!
//! # Invariants
//! - `student_id` and `course_id` are never blank.
//! - `date` is not later than the reference date used at construction or
//!   assignment (the current local date unless one is given explicitly).
//! - Ids are referential only; they are never resolved against repositories.

use crate::model::validation::{
    require_non_blank, require_not_after, ValidationError, ValidationResult,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EnrollmentRecord")]
pub struct Enrollment {
    student_id: String,
    course_id: String,
    date: NaiveDate,
}

#[derive(Deserialize)]
struct EnrollmentRecord {
    student_id: String,
    course_id: String,
    date: NaiveDate,
}

impl TryFrom<EnrollmentRecord> for Enrollment {
    type Error = ValidationError;

    fn try_from(value: EnrollmentRecord) -> Result<Self, Self::Error> {
        Self::new(value.student_id, value.course_id, value.date)
    }
}

impl Enrollment {
    /// Creates an enrollment checked against today's local date.
    pub fn new(
        student_id: impl Into<String>,
        course_id: impl Into<String>,
        date: NaiveDate,
    ) -> ValidationResult<Self> {
        Self::new_as_of(student_id, course_id, date, today())
    }

    /// Creates an enrollment checked against an explicit reference date.
    ///
    /// # Errors
    /// - `ValidationError::EmptyField` when either id is blank.
    /// - `ValidationError::FutureDate` when `date > today`.
    pub fn new_as_of(
        student_id: impl Into<String>,
        course_id: impl Into<String>,
        date: NaiveDate,
        today: NaiveDate,
    ) -> ValidationResult<Self> {
        Ok(Self {
            student_id: require_non_blank("student_id", student_id.into())?,
            course_id: require_non_blank("course_id", course_id.into())?,
            date: require_not_after("enrollment_date", date, today)?,
        })
    }

    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    pub fn course_id(&self) -> &str {
        &self.course_id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn set_student_id(&mut self, student_id: impl Into<String>) -> ValidationResult<()> {
        self.student_id = require_non_blank("student_id", student_id.into())?;
        Ok(())
    }

    pub fn set_course_id(&mut self, course_id: impl Into<String>) -> ValidationResult<()> {
        self.course_id = require_non_blank("course_id", course_id.into())?;
        Ok(())
    }

    pub fn set_date(&mut self, date: NaiveDate) -> ValidationResult<()> {
        self.set_date_as_of(date, today())
    }

    pub fn set_date_as_of(&mut self, date: NaiveDate, today: NaiveDate) -> ValidationResult<()> {
        self.date = require_not_after("enrollment_date", date, today)?;
        Ok(())
    }
}

impl Display for Enrollment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} enrolled in {} on {}",
            self.student_id,
            self.course_id,
            self.date.format(DATE_FORMAT)
        )
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
