//! Static route table and path resolution.
//!
//! ARCHITECTURE
//! ============
//! The table is the single source of truth for client-side navigation. `App`
//! mounts one catch-all Leptos route that resolves the current pathname
//! against [`ROUTES`] and renders the matched page or performs the redirect.
//! Resolution is pure so it can be unit tested without a router.
//!
//! MATCHING
//! ========
//! Paths and patterns are split on `/` with empty segments dropped, so
//! `/users` and `/users/` are the same path. `:name` segments capture one
//! segment. Exact entries require equal segment counts; non-exact entries
//! match by prefix. Entries are tried in order and the first match wins.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Target of the not-found redirect.
pub const NOT_FOUND_PATH: &str = "/not_found";

/// Screens reachable through the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Login,
    Registration,
    PostList,
    PostDetail,
    TagList,
    UserList,
    UserDetail,
    NotFound,
}

/// What a table entry does when it matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Page(Page),
    Redirect(&'static str),
}

/// One row of the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDef {
    pub pattern: &'static str,
    pub target: Target,
    pub exact: bool,
}

/// Ordered route table.
pub const ROUTES: &[RouteDef] = &[
    RouteDef { pattern: "/", target: Target::Redirect("/posts"), exact: true },
    RouteDef { pattern: "/login", target: Target::Page(Page::Login), exact: true },
    RouteDef { pattern: "/registration", target: Target::Page(Page::Registration), exact: true },
    RouteDef { pattern: "/posts", target: Target::Page(Page::PostList), exact: true },
    RouteDef { pattern: "/posts/:id", target: Target::Page(Page::PostDetail), exact: true },
    RouteDef { pattern: "/tags", target: Target::Page(Page::TagList), exact: true },
    RouteDef { pattern: "/users/", target: Target::Page(Page::UserList), exact: true },
    RouteDef { pattern: "/users/:id", target: Target::Page(Page::UserDetail), exact: true },
    RouteDef { pattern: NOT_FOUND_PATH, target: Target::Page(Page::NotFound), exact: true },
    RouteDef { pattern: "*", target: Target::Redirect(NOT_FOUND_PATH), exact: false },
];

/// Captured `:name` segments of a match.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteParams(Vec<(&'static str, String)>);

impl RouteParams {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.iter().find(|(key, _)| *key == name).map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Outcome of resolving a pathname.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    Page(Page, RouteParams),
    Redirect(&'static str),
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Match one entry against `path`, returning captured params on success.
pub fn match_route(def: &RouteDef, path: &str) -> Option<RouteParams> {
    if def.pattern == "*" {
        return Some(RouteParams::default());
    }
    let pattern: Vec<&'static str> = segments(def.pattern).collect();
    let path: Vec<&str> = segments(path).collect();
    let fits = if def.exact { path.len() == pattern.len() } else { path.len() >= pattern.len() };
    if !fits {
        return None;
    }

    let mut params = Vec::new();
    for (expected, actual) in pattern.iter().copied().zip(path.iter().copied()) {
        if let Some(name) = expected.strip_prefix(':') {
            params.push((name, actual.to_owned()));
        } else if expected != actual {
            return None;
        }
    }
    Some(RouteParams(params))
}

/// Resolve `path` against `table`; unmatched paths redirect to not-found.
pub fn resolve_in(table: &[RouteDef], path: &str) -> Resolution {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    for def in table {
        if let Some(params) = match_route(def, path) {
            return match def.target {
                Target::Page(page) => Resolution::Page(page, params),
                Target::Redirect(to) => Resolution::Redirect(to),
            };
        }
    }
    Resolution::Redirect(NOT_FOUND_PATH)
}

/// Resolve `path` against [`ROUTES`].
pub fn resolve(path: &str) -> Resolution {
    resolve_in(ROUTES, path)
}
