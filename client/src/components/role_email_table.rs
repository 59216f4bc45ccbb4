//! Admin and instructor email lists.

use leptos::prelude::*;

use super::table::{Cell, DataTable};
use crate::net::types::RoleEmail;

pub fn role_email_rows(entries: &[RoleEmail]) -> Vec<Vec<Cell>> {
    entries.iter().map(|entry| vec![Cell::text(&entry.email)]).collect()
}

#[component]
pub fn RoleEmailTable(entries: Vec<RoleEmail>, #[prop(optional)] on_delete: Option<Callback<usize>>) -> impl IntoView {
    view! {
        <DataTable test_id="RoleEmailTable" headers=vec!["Email"] rows=role_email_rows(&entries) on_delete=on_delete/>
    }
}
