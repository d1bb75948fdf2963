use axum::{
    Json,
    extract::{Query, State},
};
use fundboard_context::current_session;

use crate::modules::auth::model::{SignInPage, SignInQuery};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Sign-in page data.
///
/// Already-authenticated callers are bounced to the admin landing page
/// instead of seeing the form again. The `redirectTo` parameter is only
/// echoed back when it is a same-site path.
pub async fn sign_in(
    State(state): State<AppState>,
    Query(query): Query<SignInQuery>,
) -> Result<Json<SignInPage>, AppError> {
    if current_session().is_some() {
        return Err(AppError::redirect_to(state.auth_config.admin_home.clone()));
    }

    let redirect_to = query
        .redirect_to
        .filter(|path| path.starts_with('/') && !path.starts_with("//"));

    Ok(Json(SignInPage { redirect_to }))
}
