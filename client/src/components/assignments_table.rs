//! Assignments configured for a course.

use leptos::prelude::*;

use super::table::{Cell, DataTable};
use crate::net::types::Assignment;

pub const ASSIGNMENT_HEADERS: [&str; 5] = ["id", "Name", "Type", "Visibility", "Permission"];

pub fn assignment_rows(assignments: &[Assignment]) -> Vec<Vec<Cell>> {
    assignments
        .iter()
        .map(|asn| {
            vec![
                Cell::text(asn.id.to_string()),
                Cell::text(&asn.name),
                Cell::text(&asn.asn_type),
                Cell::text(&asn.visibility),
                Cell::text(&asn.permission),
            ]
        })
        .collect()
}

#[component]
pub fn AssignmentsTable(assignments: Vec<Assignment>) -> impl IntoView {
    view! {
        <DataTable test_id="AssignmentsTable" headers=ASSIGNMENT_HEADERS.to_vec() rows=assignment_rows(&assignments)/>
    }
}
