//! Networking modules for the blog REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` performs raw exchanges, `client` layers auth + JSON on top, and
//! `auth`/`posts`/`users`/`tags` map each domain operation to one REST call.
//! `types` defines the shared wire schema.

pub mod auth;
pub mod client;
pub mod error;
pub mod http;
pub mod posts;
pub mod tags;
pub mod types;
pub mod users;

#[cfg(test)]
pub(crate) mod testing;
