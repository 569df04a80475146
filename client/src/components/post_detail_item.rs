//! Full rendering of one post.

use leptos::prelude::*;

use crate::net::types::Post;

#[component]
pub fn PostDetailItem(post: Post) -> impl IntoView {
    let image = post.image_src();
    let tags = post.tag_names();
    let author = post.user.as_ref().map(|u| u.username.clone());

    view! {
        <article class="post-detail">
            <div class="post-detail__image">
                {match image {
                    Some(src) => view! { <img src=src alt="post"/> }.into_any(),
                    None => view! { <div class="post-detail__no-image">"No image"</div> }.into_any(),
                }}
            </div>
            <div class="post-detail__body">
                <h1 class="post-detail__title">{post.title}</h1>
                <div class="post-detail__content">{post.content}</div>
                <div class="post-detail__meta">
                    <span class="post-detail__created">{post.created_at}</span>
                    {author.map(|name| view! { <span class="post-detail__author">{name}</span> })}
                </div>
                {(!tags.is_empty())
                    .then(|| {
                        view! {
                            <ul class="post-detail__tags">
                                {tags.into_iter().map(|name| view! { <li class="tag">{name}</li> }).collect_view()}
                            </ul>
                        }
                    })}
            </div>
        </article>
    }
}
