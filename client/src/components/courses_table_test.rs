use super::*;
use crate::fixtures;

#[test]
fn course_rows_render_one_row_per_course() {
    let rows = course_rows(&fixtures::courses());
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|row| row.len() == COURSE_HEADERS.len()));
}

#[test]
fn course_name_links_to_show_page() {
    let rows = course_rows(&fixtures::courses());
    assert_eq!(rows[0][1], Cell::link("CMPSC 156", "/courses/5"));
}

#[test]
fn connected_course_shows_org_name_and_counts() {
    let rows = course_rows(&fixtures::courses());
    let texts: Vec<&str> = rows[0].iter().map(Cell::as_str).collect();
    assert_eq!(texts, vec!["5", "CMPSC 156", "S25", "UCSB", "ucsb-cs156-s25", "120", "6"]);
}

#[test]
fn unconnected_course_offers_app_install() {
    let rows = course_rows(&fixtures::courses());
    assert_eq!(rows[1][4], Cell::link("Install GitHub App", "/api/courses/redirect?courseId=6"));
    assert_eq!(rows[1][5].as_str(), "");
}
