//! Request guards.
//!
//! - [`auth::AuthUser`] -- requires a valid JWT Bearer token. Every mutating
//!   route and the user lookup take it as an extractor.

pub mod auth;
