use chrono::NaiveDate;
use records_core::{
    letter_grade_for, Course, Department, Enrollment, Grade, GradeInfo, Student,
    ValidationError,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn student_renders_id_and_name() {
    let student = Student::new("S001", "John Doe").unwrap();

    assert_eq!(student.id(), "S001");
    assert_eq!(student.name(), "John Doe");
    assert_eq!(student.to_string(), "S001 - John Doe");
}

#[test]
fn blank_required_fields_are_rejected() {
    for blank in ["", " ", "\t", " \n "] {
        assert_eq!(
            Student::new(blank, "John Doe").unwrap_err(),
            ValidationError::EmptyField { field: "student_id" }
        );
        assert_eq!(
            Student::new("S001", blank).unwrap_err(),
            ValidationError::EmptyField {
                field: "student_name"
            }
        );
        assert!(Course::new(blank, "Algebra", 3).is_err());
        assert!(Course::new("C001", blank, 3).is_err());
        assert!(Grade::new(blank, "C001", 5.0).is_err());
        assert!(Grade::new("S001", blank, 5.0).is_err());
        assert!(Enrollment::new_as_of(blank, "C001", date(2024, 1, 1), date(2024, 1, 1)).is_err());
        assert!(Enrollment::new_as_of("S001", blank, date(2024, 1, 1), date(2024, 1, 1)).is_err());
    }
}

#[test]
fn course_requires_positive_credits() {
    let course = Course::new("C001", "Algebra", 3).unwrap();
    assert_eq!(course.credits(), 3);
    assert_eq!(course.to_string(), "C001 - Algebra (3 credits)");

    for credits in [0, -1, i32::MIN] {
        let err = Course::new("C001", "Algebra", credits).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::OutOfDomain { field: "credits", .. }
        ));
    }
}

#[test]
fn department_accepts_any_strings() {
    let department = Department::new("D01", "Mathematics");
    assert_eq!(department.to_string(), "D01 - Mathematics");

    let blank = Department::new("", "");
    assert_eq!(blank.to_string(), " - ");
}

#[test]
fn grade_rejects_scores_outside_zero_to_ten() {
    for score in [-0.1, 10.01, f64::NAN, f64::INFINITY] {
        let err = Grade::new("S001", "C001", score).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::OutOfDomain { field: "score", .. }
        ));
    }
    assert!(Grade::new("S001", "C001", 0.0).is_ok());
    assert!(Grade::new("S001", "C001", 10.0).is_ok());
}

#[test]
fn grade_info_follows_threshold_table() {
    let cases = [
        (8.7, "A", 4.0),
        (5.2, "D+", 1.5),
        (0.0, "D", 1.0),
        (9.5, "A+", 4.0),
        (8.0, "B+", 3.5),
        (7.9, "B", 3.0),
        (6.5, "C+", 2.5),
        (6.0, "C", 2.0),
    ];
    for (score, letter, gpa) in cases {
        let grade = Grade::new("S001", "C001", score).unwrap();
        assert_eq!(grade.grade_info(), GradeInfo { letter, gpa }, "score {score}");
        assert_eq!(letter_grade_for(score), GradeInfo { letter, gpa });
    }
}

#[test]
fn grade_renders_score_letter_and_gpa() {
    let grade = Grade::new("S001", "C001", 8.7).unwrap();
    assert_eq!(grade.to_string(), "S001 - C001: 8.7 (A, GPA: 4)");

    let grade = Grade::new("S002", "C002", 7.0).unwrap();
    assert_eq!(grade.to_string(), "S002 - C002: 7 (B, GPA: 3)");
}

#[test]
fn enrollment_rejects_future_dates() {
    let today = date(2024, 9, 1);

    let enrollment = Enrollment::new_as_of("S001", "C001", today, today).unwrap();
    assert_eq!(enrollment.to_string(), "S001 enrolled in C001 on 2024-09-01");

    let err = Enrollment::new_as_of("S001", "C001", date(2024, 9, 2), today).unwrap_err();
    assert_eq!(
        err,
        ValidationError::FutureDate {
            field: "enrollment_date",
            date: date(2024, 9, 2),
            today,
        }
    );
}

#[test]
fn enrollment_against_current_date_accepts_past_dates() {
    let enrollment = Enrollment::new("S001", "C001", date(2000, 1, 1)).unwrap();
    assert_eq!(enrollment.date(), date(2000, 1, 1));

    assert!(Enrollment::new("S001", "C001", NaiveDate::MAX).is_err());
}

#[test]
fn enrollment_ids_are_not_resolved() {
    let enrollment =
        Enrollment::new_as_of("NO-SUCH-STUDENT", "NO-SUCH-COURSE", date(2024, 1, 1), date(2024, 1, 1))
            .unwrap();
    assert_eq!(enrollment.student_id(), "NO-SUCH-STUDENT");
    assert_eq!(enrollment.course_id(), "NO-SUCH-COURSE");
}

#[test]
fn setters_revalidate_and_keep_previous_value_on_error() {
    let mut student = Student::new("S001", "John Doe").unwrap();
    assert!(student.set_name("  ").is_err());
    assert_eq!(student.name(), "John Doe");
    student.set_name("Jane Doe").unwrap();
    assert_eq!(student.to_string(), "S001 - Jane Doe");

    let mut course = Course::new("C001", "Algebra", 3).unwrap();
    assert!(course.set_credits(0).is_err());
    assert_eq!(course.credits(), 3);
    course.set_credits(4).unwrap();
    assert_eq!(course.credits(), 4);

    let mut grade = Grade::new("S001", "C001", 5.0).unwrap();
    assert!(grade.set_score(11.0).is_err());
    assert_eq!(grade.score(), 5.0);
    grade.set_score(9.0).unwrap();
    assert_eq!(grade.grade_info().letter, "A+");

    let today = date(2024, 9, 1);
    let mut enrollment = Enrollment::new_as_of("S001", "C001", today, today).unwrap();
    assert!(enrollment.set_date_as_of(date(2024, 9, 5), today).is_err());
    assert_eq!(enrollment.date(), today);
    assert!(enrollment.set_course_id("").is_err());
    assert_eq!(enrollment.course_id(), "C001");
}

#[test]
fn valid_values_are_stored_unchanged() {
    let student = Student::new(" S001 ", "  John  ").unwrap();
    assert_eq!(student.id(), " S001 ");
    assert_eq!(student.name(), "  John  ");
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let grade = Grade::new("S001", "C001", 8.5).unwrap();
    let json = serde_json::to_value(&grade).unwrap();
    assert_eq!(json["student_id"], "S001");
    assert_eq!(json["course_id"], "C001");
    assert_eq!(json["score"], 8.5);

    let decoded: Grade = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, grade);

    let enrollment = Enrollment::new_as_of("S001", "C001", date(2024, 2, 29), date(2024, 3, 1)).unwrap();
    let json = serde_json::to_value(&enrollment).unwrap();
    assert_eq!(json["date"], "2024-02-29");
}

#[test]
fn deserialize_runs_entity_validation() {
    let value = serde_json::json!({ "id": "C001", "name": "Algebra", "credits": 0 });
    let err = serde_json::from_value::<Course>(value).unwrap_err();
    assert!(
        err.to_string().contains("out of domain for `credits`"),
        "unexpected error: {err}"
    );

    let value = serde_json::json!({ "id": "  ", "name": "John Doe" });
    let err = serde_json::from_value::<Student>(value).unwrap_err();
    assert!(
        err.to_string().contains("`student_id` is empty"),
        "unexpected error: {err}"
    );

    let value = serde_json::json!({ "student_id": "S001", "course_id": "C001", "score": 12.0 });
    assert!(serde_json::from_value::<Grade>(value).is_err());
}
