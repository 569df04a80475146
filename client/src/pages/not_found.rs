//! Landing page for unmatched routes.

use leptos::prelude::*;

use crate::components::header::Header;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Header/>
        <div class="centred-container">
            <div class="centred-container__align-centred">"Not found"</div>
        </div>
    }
}
