//! New-account form.

#[cfg(test)]
#[path = "registration_form_test.rs"]
mod registration_form_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::fetch_error::FetchError;
use crate::components::loader::Loader;
use crate::hooks::fetching::use_fetching;
use crate::net::client::AppClient;
use crate::net::types::Registration;
use crate::net::users;

pub const MISSING_FIELDS: &str = "Fill in the required fields";

/// Build a registration request, requiring every field.
///
/// Password rules (match, length, charset) are enforced by the server.
pub fn validate_registration_input(
    username: &str,
    email: &str,
    password1: &str,
    password2: &str,
) -> Result<Registration, &'static str> {
    let username = username.trim();
    let email = email.trim();
    if [username, email, password1, password2].iter().any(|v| v.is_empty()) {
        return Err(MISSING_FIELDS);
    }
    Ok(Registration {
        username: username.to_owned(),
        email: email.to_owned(),
        password1: password1.to_owned(),
        password2: password2.to_owned(),
    })
}

#[component]
pub fn RegistrationForm() -> impl IntoView {
    let client = expect_context::<AppClient>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password1 = RwSignal::new(String::new());
    let password2 = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let (register, loading, error) = use_fetching(move |registration: Registration| {
        let client = client.clone();
        let navigate = navigate.clone();
        async move {
            let user = users::register(&client, &registration).await?;
            log::info!("registered user {}", user.id);
            navigate("/login", NavigateOptions::default());
            Ok(())
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let input = validate_registration_input(
            &username.get_untracked(),
            &email.get_untracked(),
            &password1.get_untracked(),
            &password2.get_untracked(),
        );
        match input {
            Ok(registration) => {
                info.set(String::new());
                register(registration);
            }
            Err(message) => info.set(message.to_owned()),
        }
    };

    let field = move |id: &'static str, label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <label for=id>{label}</label>
            <input
                id=id
                name=id
                type=kind
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <Show when=move || !loading.get() fallback=|| view! { <Loader/> }>
            <div class="registration-form">
                <form class="registration-form__form" on:submit=on_submit.clone()>
                    {field("username", "Username:", "text", username)}
                    {field("email", "Email:", "email", email)}
                    {field("password1", "Password:", "password", password1)}
                    {field("password2", "Repeat password:", "password", password2)}
                    <button class="registration-form__submit" type="submit">
                        "Sign up"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="registration-form__message">{move || info.get()}</p>
                </Show>
                <FetchError error=error/>
            </div>
        </Show>
    }
}
