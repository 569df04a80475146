//! Minimal inline rendering of a page's last fetch error.

#[cfg(test)]
#[path = "fetch_error_test.rs"]
mod fetch_error_test;

use leptos::prelude::*;

use crate::net::error::ApiError;

/// Short user-facing description of a failed request.
pub fn describe_error(error: &ApiError) -> String {
    match error {
        ApiError::Network(_) => "Could not reach the server.".to_owned(),
        ApiError::Status { status: 401, .. } => "Please sign in to see this.".to_owned(),
        ApiError::Status { status: 404, .. } => "Nothing here.".to_owned(),
        ApiError::Status { status, .. } => format!("Request failed ({status})."),
        ApiError::Decode(_) | ApiError::Encode(_) => "Unexpected response from the server.".to_owned(),
    }
}

/// Renders nothing until `error` holds a value.
#[component]
pub fn FetchError(error: ReadSignal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <p class="fetch-error">{move || error.get().as_ref().map(describe_error).unwrap_or_default()}</p>
        </Show>
    }
}
