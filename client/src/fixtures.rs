//! Static sample data shared by unit tests.
//!
//! Values are written as backend-shaped JSON and decoded through the real
//! serde types, so a fixture that drifts from the wire schema fails loudly.

use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::net::types::{
    Assignment, Collection, Course, CourseStaff, CourseWarning, Job, RoleEmail, RosterStudent, SystemInfo, User,
};
use crate::state::current_user::CurrentUser;

fn decode<T: DeserializeOwned>(value: Value) -> T {
    serde_json::from_value(value).expect("fixture matches wire schema")
}

// =============================================================================
// CURRENT USER
// =============================================================================

pub fn not_logged_in() -> CurrentUser {
    decode(json!({ "initialData": false, "loggedIn": false, "root": null }))
}

pub fn user_only() -> CurrentUser {
    decode(json!({
        "initialData": false,
        "loggedIn": true,
        "root": {
            "user": {
                "id": 2,
                "email": "cgaucho@ucsb.edu",
                "githubLogin": "cgaucho",
                "fullName": "Chris Gaucho",
                "givenName": "Chris",
                "familyName": "Gaucho"
            },
            "roles": [{ "authority": "ROLE_USER" }]
        }
    }))
}

pub fn instructor_user() -> CurrentUser {
    decode(json!({
        "initialData": false,
        "loggedIn": true,
        "root": {
            "user": {
                "id": 3,
                "email": "prof@ucsb.edu",
                "githubLogin": "prof-ucsb",
                "fullName": "Pat Professor"
            },
            "roles": [{ "authority": "ROLE_USER" }, { "authority": "ROLE_INSTRUCTOR" }]
        }
    }))
}

pub fn admin_user() -> CurrentUser {
    decode(json!({
        "initialData": false,
        "loggedIn": true,
        "root": {
            "user": {
                "id": 1,
                "email": "phtcon@ucsb.edu",
                "githubLogin": "pconrad",
                "fullName": "Phill Conrad",
                "pictureUrl": "https://avatars.githubusercontent.com/u/1119017"
            },
            "roles": [{ "authority": "ROLE_USER" }, { "authority": "ROLE_ADMIN" }]
        }
    }))
}

// =============================================================================
// SYSTEM INFO
// =============================================================================

pub fn system_info_github_only() -> SystemInfo {
    decode(json!({
        "githubOauthLogin": "/oauth2/authorization/github",
        "sourceRepo": "https://github.com/ucsb-cs156/proj-frontiers",
        "commitId": "a1b2c3d",
        "commitMessage": "Merge pull request #42"
    }))
}

pub fn system_info_both_logins() -> SystemInfo {
    decode(json!({
        "githubOauthLogin": "/oauth2/authorization/github",
        "oauthLogin": "/oauth2/authorization/google",
        "showSwaggerUILink": true
    }))
}

pub fn system_info_empty() -> SystemInfo {
    decode(json!({}))
}

// =============================================================================
// DOMAIN ROWS
// =============================================================================

pub fn courses() -> Vec<Course> {
    decode(json!([
        {
            "id": 5,
            "courseName": "CMPSC 156",
            "term": "S25",
            "school": "UCSB",
            "orgName": "ucsb-cs156-s25",
            "installationId": "123456",
            "instructorEmail": "prof@ucsb.edu",
            "numStudents": 120,
            "numStaff": 6
        },
        {
            "id": 6,
            "courseName": "CMPSC 8",
            "term": "F25",
            "school": "UCSB"
        }
    ]))
}

pub fn course_warnings() -> Vec<CourseWarning> {
    decode(json!([
        { "message": "GitHub App is not installed for this course." },
        { "message": "3 students have not joined the organization." }
    ]))
}

pub fn roster_students() -> Vec<RosterStudent> {
    decode(json!([
        {
            "id": 1,
            "courseId": 5,
            "studentId": "A123456",
            "firstName": "Chris",
            "lastName": "Gaucho",
            "email": "cgaucho@ucsb.edu",
            "rosterStatus": "ROSTER",
            "orgStatus": "MEMBER",
            "githubLogin": "cgaucho"
        },
        {
            "id": 2,
            "courseId": 5,
            "studentId": "A654321",
            "firstName": "Lauren",
            "lastName": "Del Playa",
            "email": "ldelplaya@ucsb.edu",
            "rosterStatus": "MANUAL"
        }
    ]))
}

pub fn course_staff() -> Vec<CourseStaff> {
    decode(json!([
        {
            "id": 17,
            "courseId": 5,
            "firstName": "Taylor",
            "lastName": "Assistant",
            "email": "ta@ucsb.edu",
            "githubLogin": "ta-ucsb",
            "orgStatus": "OWNER"
        }
    ]))
}

pub fn role_emails() -> Vec<RoleEmail> {
    decode(json!([
        { "email": "phtcon@ucsb.edu" },
        { "email": "prof@ucsb.edu" }
    ]))
}

pub fn users() -> Vec<User> {
    decode(json!([
        {
            "id": 1,
            "email": "phtcon@ucsb.edu",
            "fullName": "Phill Conrad",
            "githubLogin": "pconrad",
            "admin": true,
            "instructor": false,
            "lastOnline": "2025-04-01T17:05:00Z"
        },
        {
            "id": 2,
            "email": "cgaucho@ucsb.edu",
            "fullName": "Chris Gaucho"
        }
    ]))
}

pub fn jobs() -> Vec<Job> {
    decode(json!([
        {
            "id": 1,
            "createdBy": { "id": 1, "email": "phtcon@ucsb.edu" },
            "createdAt": "2025-04-01T17:05:00Z",
            "updatedAt": "2025-04-01T17:05:03Z",
            "status": "complete",
            "log": "Hello World! from test job!\nGoodbye from test job!"
        },
        {
            "id": 2,
            "status": "running"
        }
    ]))
}

pub fn assignments() -> Vec<Assignment> {
    decode(json!([
        {
            "id": 1,
            "courseId": 5,
            "name": "jpa03",
            "asnType": "individual",
            "visibility": "private",
            "permission": "write"
        }
    ]))
}

pub fn collections() -> Vec<Collection> {
    decode(json!([
        { "id": 1, "name": "Starter Code", "description": "Template repositories" },
        { "id": 2, "name": "Archive" }
    ]))
}
