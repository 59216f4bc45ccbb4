//! Shared wire DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Optional columns default
//! so partially-populated rows (older backends, fixtures) still decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `GET /api/currentUser` for a signed-in user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUserRoot {
    #[serde(default)]
    pub user: UserInfo,
    /// Spring-style granted authorities (e.g. `ROLE_ADMIN`).
    #[serde(default)]
    pub roles: Vec<RoleGrant>,
}

/// Identity claims for the signed-in user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserInfo {
    pub id: Option<i64>,
    pub email: String,
    pub github_login: Option<String>,
    pub github_id: Option<i64>,
    pub full_name: Option<String>,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub picture_url: Option<String>,
    /// Plain role names (e.g. `ADMIN`).
    pub roles: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleGrant {
    pub authority: String,
}

/// Static deployment configuration from `GET /api/systemInfo`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemInfo {
    pub github_oauth_login: Option<String>,
    pub oauth_login: Option<String>,
    pub spring_h2_console_enabled: bool,
    #[serde(rename = "showSwaggerUILink")]
    pub show_swagger_ui_link: bool,
    pub source_repo: Option<String>,
    pub commit_id: Option<String>,
    pub commit_message: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i64,
    pub course_name: String,
    pub term: String,
    pub school: String,
    #[serde(default)]
    pub org_name: Option<String>,
    #[serde(default)]
    pub installation_id: Option<String>,
    #[serde(default)]
    pub instructor_email: Option<String>,
    #[serde(default)]
    pub num_students: Option<i64>,
    #[serde(default)]
    pub num_staff: Option<i64>,
}

/// One entry of `GET /api/courses/warnings/{courseId}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseWarning {
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterStudent {
    pub id: i64,
    pub course_id: i64,
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub roster_status: Option<String>,
    #[serde(default)]
    pub org_status: Option<String>,
    #[serde(default)]
    pub github_login: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseStaff {
    pub id: i64,
    pub course_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub github_login: Option<String>,
    #[serde(default)]
    pub org_status: Option<String>,
}

/// An admin or instructor entry; both lists are keyed by email alone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleEmail {
    pub email: String,
}

/// A row of `GET /api/admin/users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub github_login: Option<String>,
    #[serde(default)]
    pub admin: bool,
    #[serde(default)]
    pub instructor: bool,
    #[serde(default)]
    pub last_online: Option<String>,
}

/// A background job record from `GET /api/jobs/all`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: i64,
    #[serde(default)]
    pub created_by: Option<UserInfo>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    pub status: String,
    #[serde(default)]
    pub log: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: i64,
    pub course_id: i64,
    pub name: String,
    pub asn_type: String,
    pub visibility: String,
    pub permission: String,
}

/// A row of `GET /api/collections/list`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}
