//! Course staff table with optional per-row delete.

#[cfg(test)]
#[path = "course_staff_table_test.rs"]
mod course_staff_table_test;

use leptos::prelude::*;

use super::table::{Cell, DataTable, optional};
use crate::net::types::CourseStaff;

pub const STAFF_HEADERS: [&str; 6] = ["id", "First Name", "Last Name", "Email", "GitHub Login", "Status"];

pub fn staff_rows(staff: &[CourseStaff]) -> Vec<Vec<Cell>> {
    staff
        .iter()
        .map(|member| {
            vec![
                Cell::text(member.id.to_string()),
                Cell::text(&member.first_name),
                Cell::text(&member.last_name),
                Cell::text(&member.email),
                optional(member.github_login.as_deref()),
                optional(member.org_status.as_deref()),
            ]
        })
        .collect()
}

#[component]
pub fn CourseStaffTable(staff: Vec<CourseStaff>, #[prop(optional)] on_delete: Option<Callback<usize>>) -> impl IntoView {
    view! {
        <DataTable test_id="CourseStaffTable" headers=STAFF_HEADERS.to_vec() rows=staff_rows(&staff) on_delete=on_delete/>
    }
}
