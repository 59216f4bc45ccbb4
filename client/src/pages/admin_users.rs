use leptos::prelude::*;

use crate::components::status_views::LoadingView;
use crate::components::users_table::UsersTable;

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    let users = LocalResource::new(|| crate::net::api::fetch_users());

    view! {
        <div class="page admin-users-page">
            <h1>"Users"</h1>
            <Suspense fallback=|| view! { <LoadingView/> }>
                {move || users.get().map(|list| view! { <UsersTable users=list/> })}
            </Suspense>
        </div>
    }
}
