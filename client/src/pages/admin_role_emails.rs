//! Manage the admin or instructor email lists.

use leptos::prelude::*;

use super::dispatch;
use crate::components::forms::RoleEmailForm;
use crate::components::role_email_table::RoleEmailTable;
use crate::components::status_views::{ErrorBanner, LoadingView};
use crate::net::request::{role_email_create, role_email_delete};

/// Which email list a page manages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoleList {
    Admins,
    Instructors,
}

impl RoleList {
    /// Path segment used by `/api/admin/{role}`.
    pub fn path(self) -> &'static str {
        match self {
            Self::Admins => "admins",
            Self::Instructors => "instructors",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Admins => "Admins",
            Self::Instructors => "Instructors",
        }
    }
}

#[component]
pub fn AdminRoleEmailsPage(list: RoleList) -> impl IntoView {
    let entries = LocalResource::new(move || crate::net::api::fetch_role_emails(list.path()));
    let error = RwSignal::new(None::<String>);

    let on_create = Callback::new(move |email: String| {
        dispatch(role_email_create(list.path(), &email), error, move || entries.refetch());
    });

    let on_delete = Callback::new(move |index: usize| {
        let email = entries.get_untracked().and_then(|rows| rows.get(index).map(|row| row.email.clone()));
        if let Some(email) = email {
            dispatch(role_email_delete(list.path(), &email), error, move || entries.refetch());
        }
    });

    view! {
        <div class="page role-emails-page">
            <h1>{list.title()}</h1>
            <RoleEmailForm on_submit=on_create/>
            <ErrorBanner message=error/>
            <Suspense fallback=|| view! { <LoadingView/> }>
                {move || entries.get().map(|rows| view! { <RoleEmailTable entries=rows on_delete=on_delete/> })}
            </Suspense>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::role_email_table::role_email_rows;
    use crate::fixtures;

    #[test]
    fn role_lists_map_to_api_segments() {
        assert_eq!(RoleList::Admins.path(), "admins");
        assert_eq!(RoleList::Instructors.path(), "instructors");
        assert_eq!(role_email_delete(RoleList::Instructors.path(), "x@y.z").url, "/api/admin/instructors");
    }

    #[test]
    fn role_email_rows_show_one_email_per_row() {
        let rows = role_email_rows(&fixtures::role_emails());
        let emails: Vec<&str> = rows.iter().map(|row| row[0].as_str()).collect();
        assert_eq!(emails, vec!["phtcon@ucsb.edu", "prof@ucsb.edu"]);
    }
}
