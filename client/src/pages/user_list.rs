//! User directory page.

use leptos::prelude::*;

use crate::components::fetch_error::FetchError;
use crate::components::header::Header;
use crate::components::loader::Loader;
use crate::components::user_list_item::UserListItem;
use crate::hooks::fetching::use_fetching;
use crate::net::client::AppClient;
use crate::net::types::User;
use crate::net::users;

#[component]
pub fn UserListPage() -> impl IntoView {
    let client = expect_context::<AppClient>();
    let items = RwSignal::new(Vec::<User>::new());

    let (fetch_users, loading, error) = use_fetching(move |()| {
        let client = client.clone();
        async move {
            items.set(users::list(&client).await?);
            Ok(())
        }
    });

    Effect::new(move |_| fetch_users(()));

    view! {
        <Header/>
        <Show when=move || !loading.get() fallback=|| view! { <Loader/> }>
            <FetchError error=error/>
            <div class="user-list">
                {move || {
                    items.get().into_iter().map(|user| view! { <UserListItem user=user/> }).collect_view()
                }}
            </div>
        </Show>
    }
}
