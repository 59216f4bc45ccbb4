//! Top navigation bar with role-dependent links and login/logout controls.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use super::sign_in::LoginButtons;
use crate::state::current_user::{CurrentUser, Role};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    /// Rendered inside the "Admin" dropdown.
    pub admin: bool,
}

const fn admin_link(label: &'static str, href: &'static str) -> NavLink {
    NavLink { label, href, admin: true }
}

const fn link(label: &'static str, href: &'static str) -> NavLink {
    NavLink { label, href, admin: false }
}

/// Links visible to `user`, in display order.
pub fn nav_links(user: &CurrentUser) -> Vec<NavLink> {
    let mut links = Vec::new();
    if user.has_role(Role::Admin) {
        links.extend([
            admin_link("Users", "/admin/users"),
            admin_link("Admins", "/admin/admins"),
            admin_link("Instructors", "/admin/instructors"),
            admin_link("Jobs", "/admin/jobs"),
        ]);
    }
    if user.has_role(Role::Instructor) {
        links.push(link("Courses", "/courses"));
    }
    if user.logged_in {
        links.push(link("Collections", "/collections"));
        links.push(link("Profile", "/profile"));
    }
    links
}

#[component]
pub fn AppNavbar() -> impl IntoView {
    let current_user = expect_context::<RwSignal<CurrentUser>>();

    let on_logout = move |_: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/");
            }
        });
    };

    let links = move || {
        let (admin, other): (Vec<_>, Vec<_>) = current_user.with(nav_links).into_iter().partition(|l| l.admin);
        let admin_menu = (!admin.is_empty()).then(|| {
            view! {
                <details class="navbar__menu" data-testid="AppNavbar-admin-dropdown">
                    <summary>"Admin"</summary>
                    <ul>
                        {admin
                            .into_iter()
                            .map(|l| view! { <li><a href=l.href>{l.label}</a></li> })
                            .collect::<Vec<_>>()}
                    </ul>
                </details>
            }
        });
        let plain = other
            .into_iter()
            .map(|l| view! { <a class="navbar__link" href=l.href>{l.label}</a> })
            .collect::<Vec<_>>();
        view! {
            {admin_menu}
            {plain}
        }
    };

    let account = move || {
        let state = current_user.get();
        if state.initial_data {
            ().into_any()
        } else if state.logged_in {
            view! {
                <span class="navbar__welcome">{format!("Welcome, {}", state.display_name())}</span>
                <button class="btn navbar__logout" on:click=on_logout>
                    "Log Out"
                </button>
            }
            .into_any()
        } else {
            view! { <LoginButtons/> }.into_any()
        }
    };

    view! {
        <nav class="navbar" data-testid="AppNavbar">
            <a class="navbar__brand" href="/">"Frontiers"</a>
            <div class="navbar__links">{links}</div>
            <div class="navbar__account">{account}</div>
        </nav>
    }
}
