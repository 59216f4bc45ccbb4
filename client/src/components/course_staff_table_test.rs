use super::*;
use crate::fixtures;

#[test]
fn staff_rows_render_member_columns() {
    let rows = staff_rows(&fixtures::course_staff());
    let texts: Vec<&str> = rows[0].iter().map(Cell::as_str).collect();
    assert_eq!(texts, vec!["17", "Taylor", "Assistant", "ta@ucsb.edu", "ta-ucsb", "OWNER"]);
}
