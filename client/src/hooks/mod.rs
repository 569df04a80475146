//! Reusable stateful wrappers for pages and components.

pub mod fetching;
