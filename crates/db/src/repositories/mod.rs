//! Repository layer.
//!
//! [`Repo`] covers CRUD for every [`Resource`](crate::resource::Resource).
//! The zero-sized structs alongside it hold the few queries that do not fit
//! that shape. All methods accept `&Db` as the first argument.

pub mod content_repo;
pub mod generic;
pub mod media_repo;
pub mod user_repo;

pub use content_repo::ContentRepo;
pub use generic::{row_exists, Repo};
pub use media_repo::MediaRepo;
pub use user_repo::UserRepo;
