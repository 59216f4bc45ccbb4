//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render tables, forms and page chrome from props, reading the
//! current user and system info from Leptos context where needed.

pub mod assignments_table;
pub mod collections_table;
pub mod course_staff_table;
pub mod course_warnings;
pub mod courses_table;
pub mod forms;
pub mod icons;
pub mod jobs_table;
pub mod layout;
pub mod navbar;
pub mod protected_page;
pub mod role_email_table;
pub mod roster_students_table;
pub mod sign_in;
pub mod status_views;
pub mod table;
pub mod users_table;
