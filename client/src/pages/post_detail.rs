//! Single post page.

use leptos::prelude::*;

use crate::components::fetch_error::FetchError;
use crate::components::header::Header;
use crate::components::loader::Loader;
use crate::components::post_detail_item::PostDetailItem;
use crate::hooks::fetching::use_fetching;
use crate::net::client::AppClient;
use crate::net::posts;
use crate::net::types::Post;

#[component]
pub fn PostDetailPage(id: String) -> impl IntoView {
    let client = expect_context::<AppClient>();
    let post = RwSignal::new(None::<Post>);

    let (fetch_post, loading, error) = use_fetching(move |id: String| {
        let client = client.clone();
        async move {
            post.set(Some(posts::get(&client, &id).await?));
            Ok(())
        }
    });

    Effect::new(move |_| fetch_post(id.clone()));

    view! {
        <Header/>
        <Show when=move || loading.get()>
            <Loader/>
        </Show>
        <FetchError error=error/>
        <div class="centred-container">
            {move || post.get().map(|post| view! { <PostDetailItem post=post/> })}
        </div>
    }
}
