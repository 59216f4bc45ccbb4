//! Landing page.

use leptos::prelude::*;

use crate::components::courses_table::CoursesTable;
use crate::components::sign_in::LoginButtons;
use crate::state::current_user::{CurrentUser, Role};

/// Greeting line for the landing page; empty until the user fetch resolves.
pub fn home_greeting(user: &CurrentUser) -> String {
    if user.initial_data {
        String::new()
    } else if user.logged_in {
        format!("Welcome, {}!", user.display_name())
    } else {
        "Welcome to Frontiers. Sign in to manage your courses.".to_owned()
    }
}

/// Whether the landing page lists (and fetches) the user's courses.
pub fn shows_course_list(user: &CurrentUser) -> bool {
    !user.initial_data && user.has_role(Role::Instructor)
}

#[component]
pub fn HomePage() -> impl IntoView {
    let current_user = expect_context::<RwSignal<CurrentUser>>();
    let is_instructor = move || current_user.with(shows_course_list);
    let logged_out = move || current_user.with(|user| !user.initial_data && !user.logged_in);

    view! {
        <div class="page home-page">
            <h1>"Frontiers"</h1>
            <p class="home-page__greeting">{move || current_user.with(home_greeting)}</p>
            <Show when=logged_out>
                <div class="home-page__login">
                    <LoginButtons/>
                </div>
            </Show>
            <Show when=is_instructor>
                <InstructorCourses/>
            </Show>
        </div>
    }
}

/// Mounted only for instructors, so other visitors never request the list.
#[component]
fn InstructorCourses() -> impl IntoView {
    let courses = LocalResource::new(|| crate::net::api::fetch_courses());

    view! {
        <h2>"Your Courses"</h2>
        <Suspense fallback=move || view! { <p>"Loading courses..."</p> }>
            {move || courses.get().map(|list| view! { <CoursesTable courses=list/> })}
        </Suspense>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn greeting_blank_while_loading() {
        assert_eq!(home_greeting(&CurrentUser::placeholder()), "");
    }

    #[test]
    fn greeting_invites_anonymous_visitors_to_sign_in() {
        assert_eq!(
            home_greeting(&fixtures::not_logged_in()),
            "Welcome to Frontiers. Sign in to manage your courses."
        );
    }

    #[test]
    fn greeting_names_signed_in_user() {
        assert_eq!(home_greeting(&fixtures::user_only()), "Welcome, Chris Gaucho!");
    }

    #[test]
    fn course_list_only_for_instructors_and_admins() {
        assert!(!shows_course_list(&CurrentUser::placeholder()));
        assert!(!shows_course_list(&fixtures::not_logged_in()));
        assert!(!shows_course_list(&fixtures::user_only()));
        assert!(shows_course_list(&fixtures::instructor_user()));
        assert!(shows_course_list(&fixtures::admin_user()));
    }

    #[cfg(feature = "ssr")]
    fn render(user: CurrentUser) -> String {
        Owner::new().with(|| {
            provide_context(RwSignal::new(user));
            provide_context(RwSignal::new(fixtures::system_info_github_only()));
            view! { <HomePage/> }.to_html()
        })
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn course_section_absent_for_non_instructors() {
        assert!(!render(fixtures::not_logged_in()).contains("Your Courses"));
        assert!(!render(fixtures::user_only()).contains("Your Courses"));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn course_section_rendered_for_instructors() {
        assert!(render(fixtures::instructor_user()).contains("Your Courses"));
    }
}
