//! Single-course view: setup warnings, roster, staff and assignments.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use super::dispatch;
use crate::components::assignments_table::AssignmentsTable;
use crate::components::course_staff_table::CourseStaffTable;
use crate::components::course_warnings::CourseWarnings;
use crate::components::forms::RosterStudentForm;
use crate::components::roster_students_table::RosterStudentsTable;
use crate::components::status_views::{ErrorBanner, LoadingView, NotFound};
use crate::net::api;
use crate::net::request::{NewRosterStudent, course_staff_delete, roster_student_create, roster_student_delete};

/// Parse the `:id` route segment.
pub fn parse_course_id(raw: Option<&str>) -> Option<i64> {
    raw?.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

#[component]
pub fn CourseShowPage() -> impl IntoView {
    let params = use_params_map();
    let course_id = move || parse_course_id(params.read().get("id").as_deref());

    move || match course_id() {
        Some(id) => view! { <CourseDetails course_id=id/> }.into_any(),
        None => view! { <NotFound/> }.into_any(),
    }
}

#[component]
fn CourseDetails(course_id: i64) -> impl IntoView {
    let course = LocalResource::new(move || api::fetch_course(course_id));
    let warnings = LocalResource::new(move || api::fetch_course_warnings(course_id));
    let roster = LocalResource::new(move || api::fetch_roster_students(course_id));
    let staff = LocalResource::new(move || api::fetch_course_staff(course_id));
    let assignments = LocalResource::new(move || api::fetch_assignments(course_id));
    let error = RwSignal::new(None::<String>);

    let on_add_student = Callback::new(move |student: NewRosterStudent| {
        dispatch(roster_student_create(course_id, &student), error, move || {
            roster.refetch();
            warnings.refetch();
        });
    });

    let on_delete_student = Callback::new(move |index: usize| {
        let id = roster.get_untracked().and_then(|rows| rows.get(index).map(|row| row.id));
        if let Some(id) = id {
            dispatch(roster_student_delete(id, course_id), error, move || roster.refetch());
        }
    });

    let on_delete_staff = Callback::new(move |index: usize| {
        let id = staff.get_untracked().and_then(|rows| rows.get(index).map(|row| row.id));
        if let Some(id) = id {
            dispatch(course_staff_delete(id, course_id), error, move || staff.refetch());
        }
    });

    let title = move || {
        course
            .get()
            .flatten()
            .map(|c| format!("{} ({} {})", c.course_name, c.school, c.term))
            .unwrap_or_else(|| format!("Course {course_id}"))
    };

    view! {
        <div class="page course-page">
            <Suspense fallback=|| view! { <LoadingView/> }>
                <h1>{title}</h1>
                {move || warnings.get().map(|list| view! { <CourseWarnings warnings=list/> })}
            </Suspense>
            <ErrorBanner message=error/>

            <section class="course-page__section">
                <h2>"Roster"</h2>
                <RosterStudentForm on_submit=on_add_student/>
                <Suspense fallback=|| view! { <LoadingView/> }>
                    {move || {
                        roster
                            .get()
                            .map(|students| view! { <RosterStudentsTable students=students on_delete=on_delete_student/> })
                    }}
                </Suspense>
            </section>

            <section class="course-page__section">
                <h2>"Staff"</h2>
                <Suspense fallback=|| view! { <LoadingView/> }>
                    {move || staff.get().map(|list| view! { <CourseStaffTable staff=list on_delete=on_delete_staff/> })}
                </Suspense>
            </section>

            <section class="course-page__section">
                <h2>"Assignments"</h2>
                <Suspense fallback=|| view! { <LoadingView/> }>
                    {move || assignments.get().map(|list| view! { <AssignmentsTable assignments=list/> })}
                </Suspense>
            </section>
        </div>
    }
}
