//! Signed-in user's identity and granted roles.

use leptos::prelude::*;

use crate::state::current_user::CurrentUser;

/// Label/value pairs shown on the profile page.
pub fn profile_fields(user: &CurrentUser) -> Vec<(&'static str, String)> {
    let Some(root) = user.root.as_ref() else {
        return Vec::new();
    };
    let roles = root
        .roles
        .iter()
        .map(|grant| grant.authority.as_str())
        .chain(root.user.roles.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(", ");
    vec![
        ("Name", user.display_name()),
        ("Email", root.user.email.clone()),
        ("GitHub Login", root.user.github_login.clone().unwrap_or_default()),
        ("Roles", roles),
    ]
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let current_user = expect_context::<RwSignal<CurrentUser>>();
    let picture = move || current_user.with(|user| user.user().and_then(|u| u.picture_url.clone()));

    view! {
        <div class="page profile-page">
            <h1>"Profile"</h1>
            {move || picture().map(|src| view! { <img class="profile-page__avatar" src=src alt="Profile picture"/> })}
            <dl class="profile-page__fields" data-testid="ProfilePage-fields">
                {move || {
                    current_user
                        .with(profile_fields)
                        .into_iter()
                        .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                        .collect::<Vec<_>>()
                }}
            </dl>
        </div>
    }
}
