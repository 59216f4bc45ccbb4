//! Course list with a create form.

use leptos::prelude::*;

use super::dispatch;
use crate::components::courses_table::CoursesTable;
use crate::components::forms::CourseForm;
use crate::components::status_views::{ErrorBanner, LoadingView};
use crate::net::request::{NewCourse, course_create};

#[component]
pub fn CoursesIndexPage() -> impl IntoView {
    let courses = LocalResource::new(|| crate::net::api::fetch_courses());
    let error = RwSignal::new(None::<String>);
    let show_create = RwSignal::new(false);

    let on_create = Callback::new(move |course: NewCourse| {
        dispatch(course_create(&course), error, move || {
            show_create.set(false);
            courses.refetch();
        });
    });

    view! {
        <div class="page courses-page">
            <header class="courses-page__header">
                <h1>"Courses"</h1>
                <button class="btn btn--primary" on:click=move |_| show_create.update(|open| *open = !*open)>
                    "+ New Course"
                </button>
            </header>
            <Show when=move || show_create.get()>
                <CourseForm on_submit=on_create/>
            </Show>
            <ErrorBanner message=error/>
            <Suspense fallback=|| view! { <LoadingView/> }>
                {move || courses.get().map(|list| view! { <CoursesTable courses=list/> })}
            </Suspense>
        </div>
    }
}
