//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning empty data since these endpoints
//! are only meaningful in the browser session.
//!
//! ERROR HANDLING
//! ==============
//! Read helpers return `Option`/empty lists instead of errors so a failing
//! endpoint degrades one table instead of the whole page. Failures are
//! logged to the browser console.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::types::{
    Assignment, Collection, Course, CourseStaff, CourseWarning, CurrentUserRoot, Job, RoleEmail, RosterStudent,
    SystemInfo, User,
};

pub const CURRENT_USER_ENDPOINT: &str = "/api/currentUser";
pub const SYSTEM_INFO_ENDPOINT: &str = "/api/systemInfo";
pub const COURSES_ENDPOINT: &str = "/api/courses/list";
pub const USERS_ENDPOINT: &str = "/api/admin/users";
pub const JOBS_ENDPOINT: &str = "/api/jobs/all";
pub const COLLECTIONS_ENDPOINT: &str = "/api/collections/list";
pub const LOGOUT_ENDPOINT: &str = "/logout";

fn course_endpoint(course_id: i64) -> String {
    format!("/api/courses/{course_id}")
}

fn course_warnings_endpoint(course_id: i64) -> String {
    format!("/api/courses/warnings/{course_id}")
}

fn roster_students_endpoint(course_id: i64) -> String {
    format!("/api/rosterstudents/course/{course_id}")
}

fn course_staff_endpoint(course_id: i64) -> String {
    format!("/api/coursestaff/course/{course_id}")
}

fn assignments_endpoint(course_id: i64) -> String {
    format!("/api/assignments/course/{course_id}")
}

fn role_emails_endpoint(role: &str) -> String {
    format!("/api/admin/{role}/all")
}

#[cfg(feature = "hydrate")]
async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, super::error::ApiError> {
    use super::error::ApiError;

    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

async fn fetch_optional<T: DeserializeOwned>(url: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        match get_json::<T>(url).await {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("GET {url} failed: {e}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        None
    }
}

async fn fetch_list<T: DeserializeOwned>(url: &str) -> Vec<T> {
    fetch_optional::<Vec<T>>(url).await.unwrap_or_default()
}

/// Fetch the signed-in user from `/api/currentUser`.
/// Returns `None` when nobody is signed in or on the server.
pub async fn fetch_current_user() -> Option<CurrentUserRoot> {
    #[cfg(feature = "hydrate")]
    {
        // Anonymous sessions answer 401/403 or an empty body; neither is worth a warning.
        get_json::<CurrentUserRoot>(CURRENT_USER_ENDPOINT).await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch deployment settings from `/api/systemInfo`, defaulting on failure.
pub async fn fetch_system_info() -> SystemInfo {
    fetch_optional::<SystemInfo>(SYSTEM_INFO_ENDPOINT).await.unwrap_or_default()
}

pub async fn fetch_courses() -> Vec<Course> {
    fetch_list(COURSES_ENDPOINT).await
}

pub async fn fetch_course(course_id: i64) -> Option<Course> {
    fetch_optional(&course_endpoint(course_id)).await
}

pub async fn fetch_course_warnings(course_id: i64) -> Vec<CourseWarning> {
    fetch_list(&course_warnings_endpoint(course_id)).await
}

pub async fn fetch_roster_students(course_id: i64) -> Vec<RosterStudent> {
    fetch_list(&roster_students_endpoint(course_id)).await
}

pub async fn fetch_course_staff(course_id: i64) -> Vec<CourseStaff> {
    fetch_list(&course_staff_endpoint(course_id)).await
}

pub async fn fetch_assignments(course_id: i64) -> Vec<Assignment> {
    fetch_list(&assignments_endpoint(course_id)).await
}

/// Fetch the `admins` or `instructors` email list.
pub async fn fetch_role_emails(role: &str) -> Vec<RoleEmail> {
    fetch_list(&role_emails_endpoint(role)).await
}

pub async fn fetch_users() -> Vec<User> {
    fetch_list(USERS_ENDPOINT).await
}

pub async fn fetch_jobs() -> Vec<Job> {
    fetch_list(JOBS_ENDPOINT).await
}

pub async fn fetch_collections() -> Vec<Collection> {
    fetch_list(COLLECTIONS_ENDPOINT).await
}

/// End the backend session with `POST /logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = gloo_net::http::Request::post(LOGOUT_ENDPOINT).send().await {
            log::warn!("POST {LOGOUT_ENDPOINT} failed: {e}");
        }
    }
}
