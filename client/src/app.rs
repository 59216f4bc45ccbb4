//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::layout::BasicLayout;
use crate::components::protected_page::ProtectedPage;
use crate::net::types::SystemInfo;
use crate::pages::{
    admin_jobs::AdminJobsPage,
    admin_role_emails::{AdminRoleEmailsPage, RoleList},
    admin_users::AdminUsersPage,
    collections::CollectionsPage,
    course_show::CourseShowPage,
    courses_index::CoursesIndexPage,
    home::HomePage,
    login_success::LoginSuccessPage,
    not_found::NotFoundPage,
    profile::ProfilePage,
};
use crate::state::current_user::{CurrentUser, Role};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the current-user and system-info contexts, loads both once on
/// mount, and declares the route table with each page's required role.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let current_user = RwSignal::new(CurrentUser::placeholder());
    let system_info = RwSignal::new(SystemInfo::default());
    provide_context(current_user);
    provide_context(system_info);

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        leptos::task::spawn_local(async move {
            let root = crate::net::api::fetch_current_user().await;
            current_user.set(CurrentUser::from_fetch(root));
        });
        leptos::task::spawn_local(async move {
            system_info.set(crate::net::api::fetch_system_info().await);
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/frontiers.css"/>
        <Title text="Frontiers"/>

        <Router>
            <BasicLayout>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=(StaticSegment("login"), StaticSegment("success")) view=LoginSuccessPage/>
                    <Route
                        path=StaticSegment("profile")
                        view=|| view! { <ProtectedPage required=Role::User><ProfilePage/></ProtectedPage> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("users"))
                        view=|| view! { <ProtectedPage required=Role::Admin><AdminUsersPage/></ProtectedPage> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("admins"))
                        view=|| {
                            view! {
                                <ProtectedPage required=Role::Admin>
                                    <AdminRoleEmailsPage list=RoleList::Admins/>
                                </ProtectedPage>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("instructors"))
                        view=|| {
                            view! {
                                <ProtectedPage required=Role::Admin>
                                    <AdminRoleEmailsPage list=RoleList::Instructors/>
                                </ProtectedPage>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("jobs"))
                        view=|| view! { <ProtectedPage required=Role::Admin><AdminJobsPage/></ProtectedPage> }
                    />
                    <Route
                        path=StaticSegment("courses")
                        view=|| view! { <ProtectedPage required=Role::Instructor><CoursesIndexPage/></ProtectedPage> }
                    />
                    <Route
                        path=(StaticSegment("courses"), ParamSegment("id"))
                        view=|| view! { <ProtectedPage required=Role::Instructor><CourseShowPage/></ProtectedPage> }
                    />
                    <Route
                        path=StaticSegment("collections")
                        view=|| view! { <ProtectedPage required=Role::User><CollectionsPage/></ProtectedPage> }
                    />
                </Routes>
            </BasicLayout>
        </Router>
    }
}
