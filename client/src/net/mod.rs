//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles read calls, `request` describes mutating CRUD calls,
//! `types` defines the shared wire schema and `error` the failure taxonomy.

pub mod api;
pub mod error;
pub mod request;
pub mod types;
