//! Busy indicator shown while a page fetch is in flight.

use leptos::prelude::*;

#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <div class="loader" role="status" aria-live="polite">
            <span class="loader__spinner" aria-hidden="true"></span>
            <span class="loader__label">"Loading..."</span>
        </div>
    }
}
