use leptos::prelude::*;

use crate::components::status_views::NotFound;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! { <NotFound/> }
}
