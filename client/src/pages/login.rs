//! Sign-in page.

use leptos::prelude::*;

use crate::components::login_form::LoginForm;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="centred-container">
            <div class="centred-container__item">
                <p class="login-page__intro">
                    "Sign in or "
                    <a href="/registration">"sign up"</a>
                    " to create your own post!"
                </p>
            </div>
            <div class="centred-container__item">
                <LoginForm/>
            </div>
        </div>
    }
}
