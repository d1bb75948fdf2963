use axum::Json;
use chrono::{DateTime, Utc};
use fundboard_context::require_user;
use fundboard_models::User;
use serde::Serialize;

use crate::utils::errors::AppError;

#[derive(Serialize)]
pub struct AccountSettings {
    pub user: User,
    pub session_expires_at: Option<DateTime<Utc>>,
}

/// The caller's own account record. Any authenticated role may read it.
pub async fn get_account_settings() -> Result<Json<AccountSettings>, AppError> {
    let session = require_user()?;

    Ok(Json(AccountSettings {
        user: session.user,
        session_expires_at: session.expires_at,
    }))
}
