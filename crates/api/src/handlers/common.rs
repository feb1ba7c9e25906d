use axum::extract::State;
use axum::Json;
use showcase_core::error::CoreError;
use showcase_db::models::user::User;
use showcase_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{IdParam, ValidPath};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/common/user/{id}
pub async fn get_user(
    State(state): State<AppState>,
    _user: AuthUser,
    ValidPath(IdParam { id }): ValidPath<IdParam>,
) -> AppResult<Json<User>> {
    let user = UserRepo::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Missing("User not found".into())))?;
    Ok(Json(user))
}
