//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::hooks::use_location;
use leptos_router::{
    NavigateOptions, StaticSegment, WildcardSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::config;
use crate::net::client::AppClient;
use crate::net::http::BrowserTransport;
use crate::pages::{
    login::LoginPage, not_found::NotFoundPage, post_detail::PostDetailPage, post_list::PostListPage,
    registration::RegistrationPage, tag_list::TagListPage, user_detail::UserDetailPage, user_list::UserListPage,
};
use crate::routes::{self, Page, Resolution, RouteParams};
use crate::state::auth::AuthState;
use crate::state::session;
use crate::util::token_store::{LocalStorageTokenStore, TokenStore};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the API client and auth flag to the tree, restores the session
/// from storage once mounted in the browser, and hands every path to the
/// static route table.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store: Arc<dyn TokenStore> = Arc::new(LocalStorageTokenStore);
    let client = AppClient::new(BrowserTransport, store, config::api_base());
    let auth = RwSignal::new(AuthState::default());

    provide_context(client.clone());
    provide_context(auth);

    // Effects only run after hydration, so SSR output always renders anonymous.
    Effect::new(move |_| session::restore(client.store(), &auth));

    view! {
        <Title text="Blogroll"/>

        <Router>
            <main>
                <Routes fallback=|| view! { <RouteTable/> }>
                    <Route path=StaticSegment("") view=RouteTable/>
                    <Route path=WildcardSegment("path") view=RouteTable/>
                </Routes>
            </main>
        </Router>
    }
}

/// Renders whatever [`routes::ROUTES`] resolves the current pathname to.
#[component]
fn RouteTable() -> impl IntoView {
    let location = use_location();
    let resolution = Memo::new(move |_| routes::resolve(&location.pathname.get()));

    view! {
        {move || match resolution.get() {
            Resolution::Redirect(to) => {
                view! { <Redirect path=to options=NavigateOptions { replace: true, ..Default::default() }/> }
                    .into_any()
            }
            Resolution::Page(page, params) => render_page(page, &params),
        }}
    }
}

fn render_page(page: Page, params: &RouteParams) -> AnyView {
    let id = params.get("id").unwrap_or_default().to_owned();
    match page {
        Page::Login => view! { <LoginPage/> }.into_any(),
        Page::Registration => view! { <RegistrationPage/> }.into_any(),
        Page::PostList => view! { <PostListPage/> }.into_any(),
        Page::PostDetail => view! { <PostDetailPage id=id/> }.into_any(),
        Page::TagList => view! { <TagListPage/> }.into_any(),
        Page::UserList => view! { <UserListPage/> }.into_any(),
        Page::UserDetail => view! { <UserDetailPage id=id/> }.into_any(),
        Page::NotFound => view! { <NotFoundPage/> }.into_any(),
    }
}
