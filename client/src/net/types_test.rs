use super::*;

// =============================================================
// CurrentUserRoot
// =============================================================

#[test]
fn current_user_root_decodes_backend_shape() {
    let root: CurrentUserRoot = serde_json::from_value(serde_json::json!({
        "user": {
            "id": 1,
            "email": "phtcon@ucsb.edu",
            "githubLogin": "pconrad",
            "fullName": "Phill Conrad"
        },
        "roles": [{ "authority": "ROLE_USER" }, { "authority": "ROLE_ADMIN" }]
    }))
    .unwrap();
    assert_eq!(root.user.email, "phtcon@ucsb.edu");
    assert_eq!(root.user.github_login.as_deref(), Some("pconrad"));
    assert_eq!(root.user.full_name.as_deref(), Some("Phill Conrad"));
    assert_eq!(root.roles.len(), 2);
    assert_eq!(root.roles[1].authority, "ROLE_ADMIN");
}

#[test]
fn current_user_root_tolerates_missing_fields() {
    let root: CurrentUserRoot =
        serde_json::from_value(serde_json::json!({ "user": { "roles": ["ADMIN"] } })).unwrap();
    assert_eq!(root.user.roles, vec!["ADMIN".to_owned()]);
    assert!(root.user.email.is_empty());
    assert!(root.roles.is_empty());
}

// =============================================================
// SystemInfo
// =============================================================

#[test]
fn system_info_defaults_missing_fields() {
    let info: SystemInfo =
        serde_json::from_value(serde_json::json!({ "githubOauthLogin": "/oauth2/authorization/github" })).unwrap();
    assert_eq!(info.github_oauth_login.as_deref(), Some("/oauth2/authorization/github"));
    assert_eq!(info.oauth_login, None);
    assert!(!info.show_swagger_ui_link);
}

// =============================================================
// Domain rows
// =============================================================

#[test]
fn course_decodes_camel_case_columns() {
    let course: Course = serde_json::from_value(serde_json::json!({
        "id": 5,
        "courseName": "CMPSC 156",
        "term": "S25",
        "school": "UCSB",
        "orgName": "ucsb-cs156-s25"
    }))
    .unwrap();
    assert_eq!(course.course_name, "CMPSC 156");
    assert_eq!(course.org_name.as_deref(), Some("ucsb-cs156-s25"));
    assert_eq!(course.installation_id, None);
}

#[test]
fn job_decodes_without_log_or_creator() {
    let job: Job = serde_json::from_value(serde_json::json!({ "id": 9, "status": "running" })).unwrap();
    assert_eq!(job.status, "running");
    assert!(job.log.is_empty());
    assert!(job.created_by.is_none());
}

#[test]
fn roster_student_requires_identity_columns() {
    let err = serde_json::from_value::<RosterStudent>(serde_json::json!({ "id": 1 }));
    assert!(err.is_err());
}
