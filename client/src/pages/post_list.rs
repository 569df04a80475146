//! Post index page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches on mount and again whenever the query string changes, so links
//! that only alter `?search` parameters refresh the list without a remount.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::fetch_error::FetchError;
use crate::components::header::Header;
use crate::components::loader::Loader;
use crate::components::post_list_item::PostListItem;
use crate::hooks::fetching::use_fetching;
use crate::net::client::AppClient;
use crate::net::posts;
use crate::net::types::Post;

#[component]
pub fn PostListPage() -> impl IntoView {
    let client = expect_context::<AppClient>();
    let location = use_location();
    let items = RwSignal::new(Vec::<Post>::new());

    let (fetch_posts, loading, error) = use_fetching(move |()| {
        let client = client.clone();
        async move {
            items.set(posts::list(&client).await?);
            Ok(())
        }
    });

    Effect::new(move |_| {
        location.search.track();
        fetch_posts(());
    });

    view! {
        <Header/>
        <Show when=move || !loading.get() fallback=|| view! { <Loader/> }>
            <FetchError error=error/>
            <Show
                when=move || !items.with(Vec::is_empty)
                fallback=|| view! { <div class="centred-container">"No posts yet"</div> }
            >
                <div class="post-list">
                    {move || {
                        items.get().into_iter().map(|post| view! { <PostListItem post=post/> }).collect_view()
                    }}
                </div>
            </Show>
        </Show>
    }
}
