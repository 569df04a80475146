//! Email + password sign-in form.
//!
//! Presence is the only client-side check; everything else is the server's
//! call. Submission goes through the fetch hook so a stale token is refreshed
//! the same way page loads are.

#[cfg(test)]
#[path = "login_form_test.rs"]
mod login_form_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::fetch_error::FetchError;
use crate::components::loader::Loader;
use crate::hooks::fetching::use_fetching;
use crate::net::client::AppClient;
use crate::net::types::Credentials;
use crate::state::auth::AuthState;
use crate::state::session;

pub const MISSING_FIELDS: &str = "Fill in the required fields";

/// Build login credentials, requiring both fields.
pub fn validate_login_input(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok(Credentials { email: email.to_owned(), input_password: password.to_owned() })
}

#[component]
pub fn LoginForm() -> impl IntoView {
    let client = expect_context::<AppClient>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let (login, loading, error) = use_fetching(move |credentials: Credentials| {
        let client = client.clone();
        let navigate = navigate.clone();
        async move {
            session::sign_in(&client, &auth, &credentials).await?;
            info.set("You successfully authorized!".to_owned());
            navigate("/", NavigateOptions::default());
            Ok(())
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => {
                info.set(String::new());
                login(credentials);
            }
            Err(message) => info.set(message.to_owned()),
        }
    };

    view! {
        <Show when=move || !loading.get() fallback=|| view! { <Loader/> }>
            <div class="login-form">
                <form class="login-form__form" on:submit=on_submit.clone()>
                    <label for="email">"Email:"</label>
                    <input
                        id="email"
                        name="email"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label for="input_password">"Password:"</label>
                    <input
                        id="input_password"
                        name="input_password"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-form__submit" type="submit">
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-form__message">{move || info.get()}</p>
                </Show>
                <FetchError error=error/>
            </div>
        </Show>
    }
}
