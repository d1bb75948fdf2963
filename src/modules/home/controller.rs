use axum::Json;
use fundboard_context::current_user;
use fundboard_models::User;
use serde::Serialize;

use crate::utils::errors::AppError;

#[derive(Serialize)]
pub struct HomePage {
    pub user: Option<User>,
}

/// Landing page data. Runs behind `load_session`, so anonymous callers are
/// valid and see `user: null`.
pub async fn get_home() -> Result<Json<HomePage>, AppError> {
    Ok(Json(HomePage {
        user: current_user(),
    }))
}
