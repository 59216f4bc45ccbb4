use super::*;

// =============================================================
// validate_course
// =============================================================

#[test]
fn validate_course_trims_fields() {
    assert_eq!(
        validate_course("  CMPSC 156 ", " S25", "UCSB  "),
        Ok(NewCourse { course_name: "CMPSC 156".to_owned(), term: "S25".to_owned(), school: "UCSB".to_owned() })
    );
}

#[test]
fn validate_course_requires_every_field() {
    assert_eq!(validate_course("", "S25", "UCSB"), Err(REQUIRED_COURSE));
    assert_eq!(validate_course("CMPSC 156", "   ", "UCSB"), Err(REQUIRED_COURSE));
    assert_eq!(validate_course("CMPSC 156", "S25", ""), Err(REQUIRED_COURSE));
}

// =============================================================
// validate_roster_student
// =============================================================

#[test]
fn validate_roster_student_accepts_complete_input() {
    let student = validate_roster_student("A123456", "Chris", "Gaucho", " cgaucho@ucsb.edu ").unwrap();
    assert_eq!(student.email, "cgaucho@ucsb.edu");
    assert_eq!(student.student_id, "A123456");
}

#[test]
fn validate_roster_student_requires_every_field() {
    assert_eq!(validate_roster_student("", "Chris", "Gaucho", "c@ucsb.edu"), Err(REQUIRED_STUDENT));
    assert_eq!(validate_roster_student("A1", "Chris", "", "c@ucsb.edu"), Err(REQUIRED_STUDENT));
}

#[test]
fn validate_roster_student_rejects_bad_email() {
    assert_eq!(validate_roster_student("A1", "Chris", "Gaucho", "cgaucho"), Err(INVALID_EMAIL));
}

// =============================================================
// validate_email
// =============================================================

#[test]
fn validate_email_requires_user_and_domain() {
    assert_eq!(validate_email(" prof@ucsb.edu "), Ok("prof@ucsb.edu".to_owned()));
    assert_eq!(validate_email(""), Err(INVALID_EMAIL));
    assert_eq!(validate_email("@ucsb.edu"), Err(INVALID_EMAIL));
    assert_eq!(validate_email("prof@"), Err(INVALID_EMAIL));
}

// =============================================================
// validate_test_job
// =============================================================

#[test]
fn validate_test_job_parses_sleep() {
    assert_eq!(validate_test_job(true, " 250 "), Ok(TestJobParams { fail: true, sleep_ms: 250 }));
    assert_eq!(validate_test_job(false, "60000"), Ok(TestJobParams { fail: false, sleep_ms: 60_000 }));
}

#[test]
fn validate_test_job_rejects_out_of_range_sleep() {
    assert_eq!(validate_test_job(false, "60001"), Err(INVALID_SLEEP));
    assert_eq!(validate_test_job(false, "-1"), Err(INVALID_SLEEP));
    assert_eq!(validate_test_job(false, "soon"), Err(INVALID_SLEEP));
}
