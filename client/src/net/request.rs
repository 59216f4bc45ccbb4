//! CRUD request descriptors.
//!
//! DESIGN
//! ======
//! Builders return a plain `RequestDescriptor` (method, URL, query params)
//! without performing I/O, so pages can hand them to `send` and tests can
//! assert on them directly. Inputs are passed through unchecked; the backend
//! owns validation.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use super::error::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// A REST call described as data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub method: Method,
    pub url: String,
    pub params: Vec<(&'static str, String)>,
}

impl RequestDescriptor {
    fn new(method: Method, url: impl Into<String>) -> Self {
        Self { method, url: url.into(), params: Vec::new() }
    }

    fn param(mut self, key: &'static str, value: impl ToString) -> Self {
        self.params.push((key, value.to_string()));
        self
    }
}

/// Payload collected by the course form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewCourse {
    pub course_name: String,
    pub term: String,
    pub school: String,
}

/// Payload collected by the roster student form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewRosterStudent {
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Parameters for the backend's diagnostic test job.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TestJobParams {
    pub fail: bool,
    pub sleep_ms: u32,
}

// =============================================================================
// DELETE
// =============================================================================

/// `DELETE /api/admin/{role}?email=` for `admins` or `instructors`.
pub fn role_email_delete(role: &str, email: &str) -> RequestDescriptor {
    RequestDescriptor::new(Method::Delete, format!("/api/admin/{role}")).param("email", email)
}

pub fn course_staff_delete(id: i64, course_id: i64) -> RequestDescriptor {
    RequestDescriptor::new(Method::Delete, "/api/coursestaff/delete")
        .param("id", id)
        .param("courseId", course_id)
}

pub fn roster_student_delete(id: i64, course_id: i64) -> RequestDescriptor {
    RequestDescriptor::new(Method::Delete, "/api/rosterstudents")
        .param("id", id)
        .param("courseId", course_id)
}

// =============================================================================
// CREATE
// =============================================================================

pub fn role_email_create(role: &str, email: &str) -> RequestDescriptor {
    RequestDescriptor::new(Method::Post, format!("/api/admin/{role}/post")).param("email", email)
}

pub fn course_create(course: &NewCourse) -> RequestDescriptor {
    RequestDescriptor::new(Method::Post, "/api/courses/post")
        .param("courseName", &course.course_name)
        .param("term", &course.term)
        .param("school", &course.school)
}

pub fn roster_student_create(course_id: i64, student: &NewRosterStudent) -> RequestDescriptor {
    RequestDescriptor::new(Method::Post, "/api/rosterstudents/post")
        .param("courseId", course_id)
        .param("studentId", &student.student_id)
        .param("firstName", &student.first_name)
        .param("lastName", &student.last_name)
        .param("email", &student.email)
}

pub fn test_job_launch(params: TestJobParams) -> RequestDescriptor {
    RequestDescriptor::new(Method::Post, "/api/jobs/launch/testjob")
        .param("fail", params.fail)
        .param("sleepMs", params.sleep_ms)
}

/// Issue `request` through the browser fetch API.
///
/// # Errors
///
/// Returns `ApiError::Network` when the request cannot be sent,
/// `ApiError::Status` for non-2xx responses, and `ApiError::Unavailable`
/// outside the browser.
#[allow(clippy::unused_async)]
pub async fn send(request: &RequestDescriptor) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::{Method as HttpMethod, RequestBuilder};

        let method = match request.method {
            Method::Get => HttpMethod::GET,
            Method::Post => HttpMethod::POST,
            Method::Put => HttpMethod::PUT,
            Method::Delete => HttpMethod::DELETE,
        };
        let resp = RequestBuilder::new(&request.url)
            .method(method)
            .query(request.params.iter().map(|(key, value)| (*key, value.as_str())))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            log::warn!("{} {} failed: {}", request.method.as_str(), request.url, resp.status());
            return Err(ApiError::Status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}
