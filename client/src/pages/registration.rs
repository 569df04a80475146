//! Sign-up page.

use leptos::prelude::*;

use crate::components::registration_form::RegistrationForm;

#[component]
pub fn RegistrationPage() -> impl IntoView {
    view! {
        <div class="centred-container">
            <div class="centred-container__item">
                <p class="registration-page__intro">
                    "Already registered? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
            <div class="centred-container__item">
                <RegistrationForm/>
            </div>
        </div>
    }
}
