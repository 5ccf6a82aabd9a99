//! Academic record entities.
//!
//! # Responsibility
//! - Define validated value types for students, courses, departments,
//!   enrollments and grades.
//! - Keep every field invariant enforced at construction and on assignment.
//!
//! # Invariants
//! - Cross-entity references are plain string ids and are never resolved.

pub mod course;
pub mod department;
pub mod enrollment;
pub mod grade;
pub mod student;
pub mod validation;
