//! Grade entity and score-to-letter mapping.
//!
//! # Responsibility
//! - Hold one student's numeric score for one course.
//! - Convert a score into a letter grade and GPA point.
//!
//! # Invariants
//! - `student_id` and `course_id` are never blank.
//! - `score` lies in `[MIN_SCORE, MAX_SCORE]`.
//! - `GRADE_SCALE` is ordered by descending threshold and ends at `0.0`, so
//!   every valid score maps to exactly one row.

use crate::model::validation::{
    require_non_blank, require_within, ValidationError, ValidationResult,
};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 10.0;

/// `(threshold, letter, gpa)` rows, highest threshold first.
const GRADE_SCALE: [(f64, &str, f64); 8] = [
    (9.0, "A+", 4.0),
    (8.5, "A", 4.0),
    (8.0, "B+", 3.5),
    (7.0, "B", 3.0),
    (6.5, "C+", 2.5),
    (5.5, "C", 2.0),
    (5.0, "D+", 1.5),
    (0.0, "D", 1.0),
];

/// Letter grade and GPA point for one score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeInfo {
    pub letter: &'static str,
    pub gpa: f64,
}

/// Maps a score to its letter grade and GPA point.
///
/// Scans `GRADE_SCALE` from the highest threshold down and returns the first
/// row whose threshold is `<= score`. Scores below every threshold (only
/// reachable for unvalidated input) fall back to the last row.
pub fn letter_grade_for(score: f64) -> GradeInfo {
    let (_, letter, gpa) = GRADE_SCALE
        .iter()
        .copied()
        .find(|(threshold, _, _)| score >= *threshold)
        .unwrap_or(GRADE_SCALE[GRADE_SCALE.len() - 1]);
    GradeInfo { letter, gpa }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GradeRecord")]
pub struct Grade {
    student_id: String,
    course_id: String,
    score: f64,
}

#[derive(Deserialize)]
struct GradeRecord {
    student_id: String,
    course_id: String,
    score: f64,
}

impl TryFrom<GradeRecord> for Grade {
    type Error = ValidationError;

    fn try_from(value: GradeRecord) -> Result<Self, Self::Error> {
        Self::new(value.student_id, value.course_id, value.score)
    }
}

impl Grade {
    /// # Errors
    /// - `ValidationError::EmptyField` when either id is blank.
    /// - `ValidationError::OutOfDomain` when `score` is outside `[0, 10]` or NaN.
    pub fn new(
        student_id: impl Into<String>,
        course_id: impl Into<String>,
        score: f64,
    ) -> ValidationResult<Self> {
        Ok(Self {
            student_id: require_non_blank("student_id", student_id.into())?,
            course_id: require_non_blank("course_id", course_id.into())?,
            score: check_score(score)?,
        })
    }

    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    pub fn course_id(&self) -> &str {
        &self.course_id
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn set_student_id(&mut self, student_id: impl Into<String>) -> ValidationResult<()> {
        self.student_id = require_non_blank("student_id", student_id.into())?;
        Ok(())
    }

    pub fn set_course_id(&mut self, course_id: impl Into<String>) -> ValidationResult<()> {
        self.course_id = require_non_blank("course_id", course_id.into())?;
        Ok(())
    }

    pub fn set_score(&mut self, score: f64) -> ValidationResult<()> {
        self.score = check_score(score)?;
        Ok(())
    }

    pub fn grade_info(&self) -> GradeInfo {
        letter_grade_for(self.score)
    }
}

impl Display for Grade {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let info = self.grade_info();
        write!(
            f,
            "{} - {}: {} ({}, GPA: {})",
            self.student_id, self.course_id, self.score, info.letter, info.gpa
        )
    }
}

fn check_score(score: f64) -> ValidationResult<f64> {
    require_within("score", score, MIN_SCORE, MAX_SCORE)
}
