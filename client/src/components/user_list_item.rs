//! Row linking to a user profile.

#[cfg(test)]
#[path = "user_list_item_test.rs"]
mod user_list_item_test;

use leptos::prelude::*;

use crate::net::types::User;

pub fn user_href(id: i64) -> String {
    format!("/users/{id}")
}

#[component]
pub fn UserListItem(user: User) -> impl IntoView {
    view! {
        <div class="user-row">
            <a href=user_href(user.id)>{user.username}</a>
        </div>
    }
}
