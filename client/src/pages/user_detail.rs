//! User profile page.

use leptos::prelude::*;

use crate::components::fetch_error::FetchError;
use crate::components::header::Header;
use crate::components::loader::Loader;
use crate::hooks::fetching::use_fetching;
use crate::net::client::AppClient;
use crate::net::types::User;
use crate::net::users;

#[component]
pub fn UserDetailPage(id: String) -> impl IntoView {
    let client = expect_context::<AppClient>();
    let user = RwSignal::new(None::<User>);

    let (fetch_user, loading, error) = use_fetching(move |id: String| {
        let client = client.clone();
        async move {
            user.set(Some(users::get(&client, &id).await?));
            Ok(())
        }
    });

    Effect::new(move |_| fetch_user(id.clone()));

    view! {
        <Header/>
        <Show when=move || !loading.get() fallback=|| view! { <Loader/> }>
            <FetchError error=error/>
            <div class="user-detail">
                {move || user.get().map(|u| u.username)}
            </div>
        </Show>
    }
}
