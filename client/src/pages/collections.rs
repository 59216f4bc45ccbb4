use leptos::prelude::*;

use crate::components::collections_table::CollectionsTable;
use crate::components::status_views::LoadingView;

#[component]
pub fn CollectionsPage() -> impl IntoView {
    let collections = LocalResource::new(|| crate::net::api::fetch_collections());

    view! {
        <div class="page collections-page">
            <h1>"Collections"</h1>
            <Suspense fallback=|| view! { <LoadingView/> }>
                {move || collections.get().map(|list| view! { <CollectionsTable collections=list/> })}
            </Suspense>
        </div>
    }
}
