//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render server-provided records and read shared session state
//! from Leptos context; pages own fetching and pass data down as props.

pub mod fetch_error;
pub mod header;
pub mod loader;
pub mod login_form;
pub mod post_detail_item;
pub mod post_list_item;
pub mod registration_form;
pub mod tag_list;
pub mod user_list_item;
