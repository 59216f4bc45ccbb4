//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped data loading and mutations and delegates
//! rendering details to `components`. Role gating happens in `app` by
//! wrapping pages in `ProtectedPage`.

pub mod admin_jobs;
pub mod admin_role_emails;
pub mod admin_users;
pub mod collections;
pub mod course_show;
pub mod courses_index;
pub mod home;
pub mod login_success;
pub mod not_found;
pub mod profile;

use leptos::prelude::*;

use crate::net::request::RequestDescriptor;

/// Send `request` in the background. Failures land in `error`; `after` runs
/// only on success (typically a resource refetch).
pub(crate) fn dispatch<F>(request: RequestDescriptor, error: RwSignal<Option<String>>, after: F)
where
    F: FnOnce() + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::request::send(&request).await {
            Ok(()) => {
                error.set(None);
                after();
            }
            Err(e) => error.set(Some(format!("{} {} failed: {e}", request.method.as_str(), request.url))),
        }
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (request, error, after);
    }
}
