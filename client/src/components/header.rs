//! Site navigation bar with the sign-in / logout affordance.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header is where a forced logout happens: a logout answered with 401
//! clears the stored token and flips the shared auth flag, which every
//! auth-aware component observes through context.

use leptos::prelude::*;

use crate::net::client::AppClient;
use crate::state::auth::AuthState;

#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let client = expect_context::<AppClient>();

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let client = client.clone();
            leptos::task::spawn_local(async move {
                let _ = crate::state::session::sign_out(&client, &auth).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &client;
        }
    };

    view! {
        <header class="header">
            <ul class="header__menu">
                <li class="header__item">
                    <a href="/posts">"All Posts"</a>
                </li>
                <li class="header__item">
                    <a href="/users">"All Users"</a>
                </li>
                <li class="header__item">
                    <a href="/tags">"Tags"</a>
                </li>
                <Show
                    when=move || auth.get().is_auth
                    fallback=|| {
                        view! {
                            <li class="header__item">
                                <a href="/login">"Sign in / Sign up"</a>
                            </li>
                        }
                    }
                >
                    <li class="header__item header__item--action" on:click=on_logout.clone()>
                        "Logout"
                    </li>
                </Show>
            </ul>
        </header>
    }
}
