//! Placeholder and error views shown instead of page content.

use leptos::prelude::*;

#[component]
pub fn LoadingView() -> impl IntoView {
    view! {
        <div class="status-view status-view--loading" data-testid="LoadingView">
            <p>"Loading..."</p>
        </div>
    }
}

#[component]
pub fn AccessDenied() -> impl IntoView {
    view! {
        <div class="status-view status-view--denied" data-testid="AccessDenied">
            <h1>"Access Denied"</h1>
            <p>"You do not have permission to view this page."</p>
            <a href="/">"Back to home"</a>
        </div>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="status-view status-view--not-found" data-testid="NotFound">
            <h1>"Page Not Found"</h1>
            <p>"The page you requested does not exist."</p>
            <a href="/">"Back to home"</a>
        </div>
    }
}

/// Inline error from the most recent request, hidden when `None`.
#[component]
pub fn ErrorBanner(message: RwSignal<Option<String>>) -> impl IntoView {
    move || {
        message
            .get()
            .map(|text| view! { <p class="error-banner" role="alert" data-testid="ErrorBanner">{text}</p> })
    }
}
