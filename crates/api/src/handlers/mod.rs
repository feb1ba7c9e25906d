pub mod common;
pub mod contents;
pub mod crud;
pub mod events;
pub mod files;
pub mod media;
pub mod news;
pub mod products;
pub mod references;
pub mod services;
pub mod solutions;
pub mod teams;
