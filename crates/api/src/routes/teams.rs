use axum::routing::{get, put};
use axum::Router;
use showcase_db::models::team::{GalleryImage, TeamMember, TeamSection};

use crate::handlers::{crud, teams};
use crate::routes::crud::crud_routes;
use crate::state::AppState;

/// Routes mounted at `/teams`.
///
/// ```text
/// GET    /section           -> get_section
/// POST   /section           -> create_section (only when none exists)
/// PUT    /section/{id}      -> update section
/// GET    /complete          -> complete
/// *      /members[/{id}]    -> member CRUD
/// *      /gallery[/{id}]    -> gallery CRUD
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/section",
            get(teams::get_section).post(teams::create_section),
        )
        .route("/section/{id}", put(crud::update::<TeamSection>))
        .route("/complete", get(teams::complete))
        .nest("/members", crud_routes::<TeamMember>())
        .nest("/gallery", crud_routes::<GalleryImage>())
}
