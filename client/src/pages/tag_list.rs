//! Tag index page.

use leptos::prelude::*;

use crate::components::fetch_error::FetchError;
use crate::components::header::Header;
use crate::components::loader::Loader;
use crate::components::tag_list::TagList;
use crate::hooks::fetching::use_fetching;
use crate::net::client::AppClient;
use crate::net::tags;
use crate::net::types::Tag;

#[component]
pub fn TagListPage() -> impl IntoView {
    let client = expect_context::<AppClient>();
    let items = RwSignal::new(Vec::<Tag>::new());

    let (fetch_tags, loading, error) = use_fetching(move |()| {
        let client = client.clone();
        async move {
            items.set(tags::list(&client).await?);
            Ok(())
        }
    });

    Effect::new(move |_| fetch_tags(()));

    view! {
        <Header/>
        <Show when=move || !loading.get() fallback=|| view! { <Loader/> }>
            <FetchError error=error/>
            {move || view! { <TagList tags=items.get()/> }}
        </Show>
    }
}
