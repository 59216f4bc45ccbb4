//! Role-gated wrapper for route components.

#[cfg(all(test, feature = "ssr"))]
#[path = "protected_page_test.rs"]
mod protected_page_test;

use leptos::prelude::*;

use super::sign_in::SignInPrompt;
use super::status_views::{AccessDenied, LoadingView};
use crate::state::current_user::{CurrentUser, Role};
use crate::util::auth::{ViewChoice, choose_view};

/// Render `children` only for users holding `required`; otherwise a loading
/// placeholder, the sign-in prompt, or the access-denied page. Re-evaluates
/// whenever the current user signal changes.
#[component]
pub fn ProtectedPage(required: Role, children: ChildrenFn) -> impl IntoView {
    let current_user = expect_context::<RwSignal<CurrentUser>>();

    move || match current_user.with(|user| choose_view(user, required)) {
        ViewChoice::Loading => view! { <LoadingView/> }.into_any(),
        ViewChoice::SignInPrompt => view! { <SignInPrompt/> }.into_any(),
        ViewChoice::AccessDenied => view! { <AccessDenied/> }.into_any(),
        ViewChoice::Show => children().into_any(),
    }
}
