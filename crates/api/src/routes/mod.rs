pub mod common;
pub mod contents;
pub mod crud;
pub mod events;
pub mod files;
pub mod health;
pub mod media;
pub mod news;
pub mod partners;
pub mod products;
pub mod references;
pub mod services;
pub mod solutions;
pub mod teams;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /news                                   CRUD
/// /news/featured                          featured items
/// /news/category/{id}                     items in a service category
///
/// /events                                 CRUD (reads include media)
/// /events/{id}/media                      list, add
/// /events/{id}/media/{media_id}           update, delete
///
/// /media                                  CRUD
/// /media/search?term=                     search title, caption, event title
/// /media/type/{type}                      filter by image|video
///
/// /products                               CRUD
/// /products/categories                    category CRUD
/// /products/categories/{id}/products      products in a category
/// /products/complete-data                 categories with products
///
/// /solutions                              CRUD (single read includes products)
/// /solutions/{id}/products                products of a solution
/// /solutions/products                     solution product create
/// /solutions/products/{id}                solution product get, update, delete
/// /solutions/business-line/{business_line}
/// /solutions/complete-data                solutions with products
///
/// /services                               CRUD
/// /services/categories                    category CRUD
/// /services/category/{id}                 services in a category
/// /services/complete-data                 categories with services
///
/// /partners                               CRUD
///
/// /references                             CRUD
/// /references/featured                    featured references
/// /references/complete-data               all plus featured
///
/// /teams/section                          get, create (singleton)
/// /teams/section/{id}                     update
/// /teams/members                          CRUD
/// /teams/gallery                          CRUD
/// /teams/complete                         section, members, gallery
///
/// /contents                               CRUD
/// /contents/sections                      distinct section names
/// /contents/section/{section}             content of one section
///
/// /common/user/{id}                       user lookup (auth required)
///
/// /file/upload/{directory}                multipart upload (auth required)
/// /file/media                             delete stored file + media rows
/// ```
///
/// Every POST, PUT and DELETE requires a bearer token.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/news", news::router())
        .nest("/events", events::router())
        .nest("/media", media::router())
        .nest("/products", products::router())
        .nest("/solutions", solutions::router())
        .nest("/services", services::router())
        .nest("/partners", partners::router())
        .nest("/references", references::router())
        .nest("/teams", teams::router())
        .nest("/contents", contents::router())
        .nest("/common", common::router())
        .nest("/file", files::router())
}
