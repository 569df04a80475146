//! Flat list of tag names.

use leptos::prelude::*;

use crate::net::types::Tag;

#[component]
pub fn TagList(tags: Vec<Tag>) -> impl IntoView {
    if tags.is_empty() {
        return view! { <p class="tag-list__empty">"No tags yet"</p> }.into_any();
    }
    view! {
        <ul class="tag-list">
            {tags.into_iter().map(|tag| view! { <li class="tag">{tag.name}</li> }).collect_view()}
        </ul>
    }
    .into_any()
}
