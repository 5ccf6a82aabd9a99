//! Repository layer for in-memory entity collections.
//!
//! # Responsibility
//! - Define the add/remove/list contract shared by every entity collection.
//! - Deliver change notifications to registered observers.
//!
//! # Invariants
//! - Repositories never validate entities; entities are valid by construction.
//! - No cross-repository checks (an enrollment's ids are not looked up).

pub mod list_repo;

use crate::model::course::Course;
use crate::model::student::Student;
use list_repo::ListRepository;

/// Student collection. Entity-specific queries belong here once needed.
pub type StudentRepository = ListRepository<Student>;

/// Course collection.
pub type CourseRepository = ListRepository<Course>;
