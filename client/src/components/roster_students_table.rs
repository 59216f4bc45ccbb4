//! Course roster table with optional per-row delete.

#[cfg(test)]
#[path = "roster_students_table_test.rs"]
mod roster_students_table_test;

use leptos::prelude::*;

use super::table::{Cell, DataTable, optional};
use crate::net::types::RosterStudent;

pub const ROSTER_HEADERS: [&str; 7] = ["id", "Student Id", "First Name", "Last Name", "Email", "GitHub Login", "Status"];

pub fn roster_rows(students: &[RosterStudent]) -> Vec<Vec<Cell>> {
    students
        .iter()
        .map(|student| {
            vec![
                Cell::text(student.id.to_string()),
                Cell::text(&student.student_id),
                Cell::text(&student.first_name),
                Cell::text(&student.last_name),
                Cell::text(&student.email),
                optional(student.github_login.as_deref()),
                optional(student.org_status.as_deref().or(student.roster_status.as_deref())),
            ]
        })
        .collect()
}

#[component]
pub fn RosterStudentsTable(
    students: Vec<RosterStudent>,
    #[prop(optional)] on_delete: Option<Callback<usize>>,
) -> impl IntoView {
    view! {
        <DataTable
            test_id="RosterStudentsTable"
            headers=ROSTER_HEADERS.to_vec()
            rows=roster_rows(&students)
            on_delete=on_delete
        />
    }
}
