//! Landing route after OAuth completes; sends the user back where they were.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::status_views::LoadingView;
use crate::util::redirect::{BrowserSession, post_sign_in_target};

#[component]
pub fn LoginSuccessPage() -> impl IntoView {
    let navigate = use_navigate();

    Effect::new(move || {
        let target = post_sign_in_target(&BrowserSession);
        navigate(&target, NavigateOptions::default());
    });

    view! { <LoadingView/> }
}
