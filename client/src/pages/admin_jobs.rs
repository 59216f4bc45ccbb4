//! Background job history and the test-job launcher.

use leptos::prelude::*;

use super::dispatch;
use crate::components::forms::TestJobForm;
use crate::components::jobs_table::JobsTable;
use crate::components::status_views::{ErrorBanner, LoadingView};
use crate::net::request::{TestJobParams, test_job_launch};

#[component]
pub fn AdminJobsPage() -> impl IntoView {
    let jobs = LocalResource::new(|| crate::net::api::fetch_jobs());
    let error = RwSignal::new(None::<String>);

    let on_launch = Callback::new(move |params: TestJobParams| {
        dispatch(test_job_launch(params), error, move || jobs.refetch());
    });

    view! {
        <div class="page admin-jobs-page">
            <h1>"Jobs"</h1>
            <h2>"Launch Jobs"</h2>
            <TestJobForm on_submit=on_launch/>
            <ErrorBanner message=error/>
            <h2>"Job Status"</h2>
            <button class="btn" on:click=move |_| jobs.refetch()>"Refresh"</button>
            <Suspense fallback=|| view! { <LoadingView/> }>
                {move || jobs.get().map(|list| view! { <JobsTable jobs=list/> })}
            </Suspense>
        </div>
    }
}
