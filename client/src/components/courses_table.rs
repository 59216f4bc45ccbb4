//! Course list for instructors and admins.

#[cfg(test)]
#[path = "courses_table_test.rs"]
mod courses_table_test;

use leptos::prelude::*;

use super::table::{Cell, DataTable};
use crate::net::types::Course;

pub const COURSE_HEADERS: [&str; 7] = ["id", "Course Name", "Term", "School", "GitHub Org", "Students", "Staff"];

/// Backend route that starts the GitHub App installation for a course.
pub fn install_app_href(course_id: i64) -> String {
    format!("/api/courses/redirect?courseId={course_id}")
}

pub fn course_rows(courses: &[Course]) -> Vec<Vec<Cell>> {
    courses
        .iter()
        .map(|course| {
            let org = match course.org_name.as_deref() {
                Some(org) if !org.is_empty() => Cell::text(org),
                _ => Cell::link("Install GitHub App", install_app_href(course.id)),
            };
            vec![
                Cell::text(course.id.to_string()),
                Cell::link(&course.course_name, format!("/courses/{}", course.id)),
                Cell::text(&course.term),
                Cell::text(&course.school),
                org,
                Cell::text(course.num_students.map(|n| n.to_string()).unwrap_or_default()),
                Cell::text(course.num_staff.map(|n| n.to_string()).unwrap_or_default()),
            ]
        })
        .collect()
}

#[component]
pub fn CoursesTable(courses: Vec<Course>) -> impl IntoView {
    view! { <DataTable test_id="CoursesTable" headers=COURSE_HEADERS.to_vec() rows=course_rows(&courses)/> }
}
