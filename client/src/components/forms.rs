//! Create forms for courses, roster students, role emails and test jobs.
//!
//! DESIGN
//! ======
//! Forms own their input signals, validate with pure helpers, and hand a typed
//! payload to an injected `on_submit` callback. Pages decide what request to
//! send; forms never touch the network.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use leptos::prelude::*;

use crate::net::request::{NewCourse, NewRosterStudent, TestJobParams};

pub const MAX_TEST_JOB_SLEEP_MS: u32 = 60_000;

const REQUIRED_COURSE: &str = "Course name, term and school are required.";
const REQUIRED_STUDENT: &str = "Student id, first name, last name and email are required.";
const INVALID_EMAIL: &str = "Enter a valid email address.";
const INVALID_SLEEP: &str = "Sleep must be a whole number of milliseconds up to 60000.";

fn looks_like_email(value: &str) -> bool {
    value.split_once('@').is_some_and(|(user, domain)| !user.is_empty() && !domain.is_empty())
}

pub fn validate_course(course_name: &str, term: &str, school: &str) -> Result<NewCourse, &'static str> {
    let (course_name, term, school) = (course_name.trim(), term.trim(), school.trim());
    if course_name.is_empty() || term.is_empty() || school.is_empty() {
        return Err(REQUIRED_COURSE);
    }
    Ok(NewCourse { course_name: course_name.to_owned(), term: term.to_owned(), school: school.to_owned() })
}

pub fn validate_roster_student(
    student_id: &str,
    first_name: &str,
    last_name: &str,
    email: &str,
) -> Result<NewRosterStudent, &'static str> {
    let fields = [student_id.trim(), first_name.trim(), last_name.trim(), email.trim()];
    if fields.iter().any(|field| field.is_empty()) {
        return Err(REQUIRED_STUDENT);
    }
    let [student_id, first_name, last_name, email] = fields;
    if !looks_like_email(email) {
        return Err(INVALID_EMAIL);
    }
    Ok(NewRosterStudent {
        student_id: student_id.to_owned(),
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        email: email.to_owned(),
    })
}

pub fn validate_email(email: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if looks_like_email(email) { Ok(email.to_owned()) } else { Err(INVALID_EMAIL) }
}

pub fn validate_test_job(fail: bool, sleep_ms: &str) -> Result<TestJobParams, &'static str> {
    let sleep_ms = sleep_ms.trim().parse::<u32>().map_err(|_| INVALID_SLEEP)?;
    if sleep_ms > MAX_TEST_JOB_SLEEP_MS {
        return Err(INVALID_SLEEP);
    }
    Ok(TestJobParams { fail, sleep_ms })
}

/// Labeled text input bound to `value`.
#[component]
fn TextField(label: &'static str, test_id: &'static str, value: RwSignal<String>) -> impl IntoView {
    view! {
        <label class="form__label">
            {label}
            <input
                class="form__input"
                type="text"
                data-testid=test_id
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
fn FormError(error: RwSignal<Option<&'static str>>) -> impl IntoView {
    move || error.get().map(|message| view! { <p class="form__error" role="alert">{message}</p> })
}

#[component]
pub fn CourseForm(on_submit: Callback<NewCourse>) -> impl IntoView {
    let course_name = RwSignal::new(String::new());
    let term = RwSignal::new(String::new());
    let school = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_course(&course_name.get(), &term.get(), &school.get()) {
            Ok(course) => {
                error.set(None);
                on_submit.run(course);
            }
            Err(message) => error.set(Some(message)),
        }
    };

    view! {
        <form class="form" data-testid="CourseForm" on:submit=submit>
            <TextField label="Course Name" test_id="CourseForm-courseName" value=course_name/>
            <TextField label="Term" test_id="CourseForm-term" value=term/>
            <TextField label="School" test_id="CourseForm-school" value=school/>
            <FormError error=error/>
            <button class="btn btn--primary" type="submit" data-testid="CourseForm-submit">
                "Create"
            </button>
        </form>
    }
}

#[component]
pub fn RosterStudentForm(on_submit: Callback<NewRosterStudent>) -> impl IntoView {
    let student_id = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_roster_student(&student_id.get(), &first_name.get(), &last_name.get(), &email.get()) {
            Ok(student) => {
                error.set(None);
                on_submit.run(student);
            }
            Err(message) => error.set(Some(message)),
        }
    };

    view! {
        <form class="form" data-testid="RosterStudentForm" on:submit=submit>
            <TextField label="Student Id" test_id="RosterStudentForm-studentId" value=student_id/>
            <TextField label="First Name" test_id="RosterStudentForm-firstName" value=first_name/>
            <TextField label="Last Name" test_id="RosterStudentForm-lastName" value=last_name/>
            <TextField label="Email" test_id="RosterStudentForm-email" value=email/>
            <FormError error=error/>
            <button class="btn btn--primary" type="submit" data-testid="RosterStudentForm-submit">
                "Add Student"
            </button>
        </form>
    }
}

#[component]
pub fn RoleEmailForm(on_submit: Callback<String>) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_email(&email.get()) {
            Ok(value) => {
                error.set(None);
                email.set(String::new());
                on_submit.run(value);
            }
            Err(message) => error.set(Some(message)),
        }
    };

    view! {
        <form class="form form--inline" data-testid="RoleEmailForm" on:submit=submit>
            <TextField label="Email" test_id="RoleEmailForm-email" value=email/>
            <FormError error=error/>
            <button class="btn btn--primary" type="submit" data-testid="RoleEmailForm-submit">
                "Add"
            </button>
        </form>
    }
}

#[component]
pub fn TestJobForm(on_submit: Callback<TestJobParams>) -> impl IntoView {
    let fail = RwSignal::new(false);
    let sleep_ms = RwSignal::new("1000".to_owned());
    let error = RwSignal::new(None::<&'static str>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_test_job(fail.get(), &sleep_ms.get()) {
            Ok(params) => {
                error.set(None);
                on_submit.run(params);
            }
            Err(message) => error.set(Some(message)),
        }
    };

    view! {
        <form class="form form--inline" data-testid="TestJobForm" on:submit=submit>
            <label class="form__label form__label--checkbox">
                <input
                    type="checkbox"
                    data-testid="TestJobForm-fail"
                    prop:checked=move || fail.get()
                    on:change=move |ev| fail.set(event_target_checked(&ev))
                />
                "Fail"
            </label>
            <TextField label="Sleep (ms)" test_id="TestJobForm-sleepMs" value=sleep_ms/>
            <FormError error=error/>
            <button class="btn btn--primary" type="submit" data-testid="TestJobForm-submit">
                "Launch Test Job"
            </button>
        </form>
    }
}
