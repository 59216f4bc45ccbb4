//! Background job history with preformatted logs.

#[cfg(test)]
#[path = "jobs_table_test.rs"]
mod jobs_table_test;

use leptos::prelude::*;

use super::table::{Cell, DataTable};
use crate::net::types::Job;
use crate::util::time::format_time;

pub const JOB_HEADERS: [&str; 6] = ["id", "Created By", "Created", "Updated", "Status", "Log"];

pub fn job_rows(jobs: &[Job]) -> Vec<Vec<Cell>> {
    jobs.iter()
        .map(|job| {
            let created_by = job.created_by.as_ref().map(|user| user.email.clone()).unwrap_or_default();
            vec![
                Cell::text(job.id.to_string()),
                Cell::text(created_by),
                Cell::text(format_time(job.created_at.as_deref())),
                Cell::text(format_time(job.updated_at.as_deref())),
                Cell::text(&job.status),
                Cell::Pre(job.log.clone()),
            ]
        })
        .collect()
}

#[component]
pub fn JobsTable(jobs: Vec<Job>) -> impl IntoView {
    view! { <DataTable test_id="JobsTable" headers=JOB_HEADERS.to_vec() rows=job_rows(&jobs)/> }
}
