#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::fixtures;

#[test]
fn job_rows_format_timestamps_and_keep_log_lines() {
    let rows = job_rows(&fixtures::jobs());
    assert_eq!(rows[0][1].as_str(), "phtcon@ucsb.edu");
    assert_eq!(rows[0][2].as_str(), "4/1/2025, 5:05:00 PM");
    assert_eq!(rows[0][3].as_str(), "4/1/2025, 5:05:03 PM");
    assert_eq!(rows[0][4].as_str(), "complete");
    assert_eq!(rows[0][5], Cell::Pre("Hello World! from test job!\nGoodbye from test job!".to_owned()));
}

#[test]
fn running_job_has_blank_optional_columns() {
    let rows = job_rows(&fixtures::jobs());
    let texts: Vec<&str> = rows[1].iter().map(Cell::as_str).collect();
    assert_eq!(texts, vec!["2", "", "", "", "running", ""]);
}
