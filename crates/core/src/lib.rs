//! Domain primitives shared by the database and HTTP layers.
//!
//! Nothing in this crate performs I/O.

pub mod error;
pub mod media;
pub mod types;
pub mod upload;
