//! Entity rows, their input DTOs, and their [`Resource`](crate::resource::Resource)
//! configuration.
//!
//! Each input DTO is accepted by both create and update; update replaces
//! every writable column.

pub mod content;
pub mod event;
pub mod media;
pub mod news;
pub mod partner;
pub mod product;
pub mod reference;
pub mod service;
pub mod solution;
pub mod team;
pub mod user;
