//! Page chrome: navbar, content container and footer.

use leptos::prelude::*;

use super::navbar::AppNavbar;
use crate::net::types::SystemInfo;

/// Footer line naming the deployed source and commit, when known.
pub fn footer_text(info: &SystemInfo) -> Option<String> {
    let repo = info.source_repo.as_deref().filter(|repo| !repo.is_empty())?;
    Some(match info.commit_id.as_deref() {
        Some(commit) if !commit.is_empty() => format!("Source: {repo} @ {commit}"),
        _ => format!("Source: {repo}"),
    })
}

#[component]
pub fn BasicLayout(children: Children) -> impl IntoView {
    let system_info = expect_context::<RwSignal<SystemInfo>>();

    view! {
        <AppNavbar/>
        <main class="container">{children()}</main>
        <footer class="footer" data-testid="Footer">
            <p>"Frontiers is a course management tool for GitHub Classroom-style organizations."</p>
            {move || system_info.with(footer_text).map(|text| view! { <p class="footer__source">{text}</p> })}
        </footer>
    }
}
