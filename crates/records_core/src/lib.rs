//! Core domain logic for the academic records demo.
//! This crate is the single source of truth for entity invariants and
//! repository notification behaviour.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_dir, default_log_level, init_logging, logging_status};
pub use model::course::Course;
pub use model::department::Department;
pub use model::enrollment::Enrollment;
pub use model::grade::{letter_grade_for, Grade, GradeInfo, MAX_SCORE, MIN_SCORE};
pub use model::student::Student;
pub use model::validation::{ValidationError, ValidationResult};
pub use repo::list_repo::{
    ChangeEvent, ChangeKind, ChangeObserver, ListRepository, Repository, SubscriptionId,
};
pub use repo::{CourseRepository, StudentRepository};
pub use service::demo::run_demo;
