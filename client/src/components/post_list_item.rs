//! Card linking to a single post from the post list.

#[cfg(test)]
#[path = "post_list_item_test.rs"]
mod post_list_item_test;

use leptos::prelude::*;

use crate::net::types::Post;

pub fn post_href(id: i64) -> String {
    format!("/posts/{id}")
}

#[component]
pub fn PostListItem(post: Post) -> impl IntoView {
    let href = post_href(post.id);
    let image = post.image_src();

    view! {
        <a class="post-card" href=href>
            <div class="post-card__image">
                {match image {
                    Some(src) => view! { <img src=src alt="post"/> }.into_any(),
                    None => view! { <div class="post-card__no-image">"No image"</div> }.into_any(),
                }}
            </div>
            <div class="post-card__body">
                <div class="post-card__title">{post.title}</div>
                <div class="post-card__content">{post.content}</div>
                <div class="post-card__created">{post.created_at}</div>
            </div>
        </a>
    }
}
