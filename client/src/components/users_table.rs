//! Read-only list of every user known to the backend.

#[cfg(test)]
#[path = "users_table_test.rs"]
mod users_table_test;

use leptos::prelude::*;

use super::table::{Cell, DataTable, optional};
use crate::net::types::User;
use crate::util::time::format_time;

pub const USER_HEADERS: [&str; 7] = ["id", "Email", "Full Name", "GitHub Login", "Admin", "Instructor", "Last Online"];

pub fn user_rows(users: &[User]) -> Vec<Vec<Cell>> {
    users
        .iter()
        .map(|user| {
            vec![
                Cell::text(user.id.to_string()),
                Cell::text(&user.email),
                Cell::text(&user.full_name),
                optional(user.github_login.as_deref()),
                Cell::text(user.admin.to_string()),
                Cell::text(user.instructor.to_string()),
                Cell::text(format_time(user.last_online.as_deref())),
            ]
        })
        .collect()
}

#[component]
pub fn UsersTable(users: Vec<User>) -> impl IntoView {
    view! { <DataTable test_id="UsersTable" headers=USER_HEADERS.to_vec() rows=user_rows(&users)/> }
}
