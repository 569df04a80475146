//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetch on mount through the
//! fetch hook) and delegates rendering details to `components`.

pub mod login;
pub mod not_found;
pub mod post_detail;
pub mod post_list;
pub mod registration;
pub mod tag_list;
pub mod user_detail;
pub mod user_list;
