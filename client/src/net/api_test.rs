use super::*;

#[test]
fn course_endpoints_embed_course_id() {
    assert_eq!(course_endpoint(5), "/api/courses/5");
    assert_eq!(course_warnings_endpoint(5), "/api/courses/warnings/5");
    assert_eq!(roster_students_endpoint(5), "/api/rosterstudents/course/5");
    assert_eq!(course_staff_endpoint(5), "/api/coursestaff/course/5");
    assert_eq!(assignments_endpoint(5), "/api/assignments/course/5");
}

#[test]
fn role_emails_endpoint_formats_role() {
    assert_eq!(role_emails_endpoint("admins"), "/api/admin/admins/all");
    assert_eq!(role_emails_endpoint("instructors"), "/api/admin/instructors/all");
}

#[test]
fn fixed_endpoints_match_backend_routes() {
    assert_eq!(CURRENT_USER_ENDPOINT, "/api/currentUser");
    assert_eq!(SYSTEM_INFO_ENDPOINT, "/api/systemInfo");
    assert_eq!(COLLECTIONS_ENDPOINT, "/api/collections/list");
}

#[test]
fn fetchers_degrade_to_empty_off_browser() {
    futures::executor::block_on(async {
        assert!(fetch_current_user().await.is_none());
        assert_eq!(fetch_system_info().await, SystemInfo::default());
        assert!(fetch_courses().await.is_empty());
        assert!(fetch_course(5).await.is_none());
        assert!(fetch_course_warnings(5).await.is_empty());
        assert!(fetch_collections().await.is_empty());
    });
}
