//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` holds the observable session flag provided through context;
//! `session` owns the flows that move the token slot and the flag together.

pub mod auth;
pub mod session;
