//! Setup warnings shown at the top of a course page.

#[cfg(all(test, feature = "ssr"))]
#[path = "course_warnings_test.rs"]
mod course_warnings_test;

use leptos::prelude::*;

use crate::net::types::CourseWarning;

#[component]
pub fn CourseWarnings(warnings: Vec<CourseWarning>) -> impl IntoView {
    (!warnings.is_empty()).then(|| {
        view! {
            <ul class="course-warnings" data-testid="CourseWarnings">
                {warnings
                    .into_iter()
                    .map(|warning| view! { <li class="course-warnings__item">{warning.message}</li> })
                    .collect::<Vec<_>>()}
            </ul>
        }
    })
}
