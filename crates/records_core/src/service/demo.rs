//! Fixed demonstration use-case over student and course repositories.
//!
//! # Responsibility
//! - Compose repositories and observers explicitly, without process state.
//! - Run the fixed add/list/remove sequence and return its transcript.
//!
//! # Invariants
//! - Transcript order matches execution order; observer output is
//!   interleaved exactly where the mutation happened.
//! - Any validation failure aborts the sequence and is returned unchanged.

use crate::model::course::Course;
use crate::model::student::Student;
use crate::model::validation::ValidationResult;
use crate::repo::list_repo::{ListRepository, Repository};
use crate::repo::{CourseRepository, StudentRepository};
use log::info;
use std::cell::RefCell;
use std::fmt::Display;
use std::rc::Rc;

pub const STUDENT_LIST_HEADING: &str = "Student list:";
pub const COURSE_LIST_HEADING: &str = "Course list:";
pub const STUDENT_LIST_AFTER_REMOVAL_HEADING: &str = "Student list after removal:";

type Transcript = Rc<RefCell<Vec<String>>>;

/// Runs the demonstration sequence and returns every output line.
///
/// Blank lines separate the listing sections.
///
/// # Errors
/// - Returns the first `ValidationError` raised while building entities.
pub fn run_demo() -> ValidationResult<Vec<String>> {
    info!("event=demo_start module=service");
    let transcript: Transcript = Rc::new(RefCell::new(Vec::new()));

    let mut students = StudentRepository::new();
    let mut courses = CourseRepository::new();
    echo_changes(&mut students, "Student Repository", &transcript);
    echo_changes(&mut courses, "Course Repository", &transcript);

    let first = Student::new("S001", "Nguyễn Văn A")?;
    let second = Student::new("S002", "Trần Thị B")?;
    students.add(first.clone());
    students.add(second);

    courses.add(Course::new("C001", "Lập trình OOP", 3)?);
    courses.add(Course::new("C002", "Cơ sở dữ liệu", 4)?);

    write_listing(&transcript, STUDENT_LIST_HEADING, &students);
    write_listing(&transcript, COURSE_LIST_HEADING, &courses);

    push_line(&transcript, String::new());
    push_line(&transcript, format!("Removing student {}:", first.name()));
    students.remove(&first);

    write_listing(&transcript, STUDENT_LIST_AFTER_REMOVAL_HEADING, &students);

    let lines = transcript.take();
    info!(
        "event=demo_finish module=service status=ok lines={}",
        lines.len()
    );
    Ok(lines)
}

fn echo_changes<T: 'static>(
    repo: &mut ListRepository<T>,
    label: &'static str,
    transcript: &Transcript,
) {
    let sink = Rc::clone(transcript);
    repo.subscribe(move |_, event| {
        sink.borrow_mut().push(format!("{label}: {}", event.message));
    });
}

fn write_listing<T: Display + PartialEq>(
    transcript: &Transcript,
    heading: &str,
    repo: &ListRepository<T>,
) {
    push_line(transcript, String::new());
    push_line(transcript, heading.to_string());
    for item in repo.get_all() {
        push_line(transcript, item.to_string());
    }
}

fn push_line(transcript: &Transcript, line: String) {
    transcript.borrow_mut().push(line);
}
