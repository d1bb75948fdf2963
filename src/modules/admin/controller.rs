use axum::{
    Json,
    extract::{Path, State},
    response::Response,
};
use chrono::Utc;
use fundboard_context::require_user;
use fundboard_models::Session;

use crate::modules::admin::model::{ACCOUNTS, AccountSummary, DashboardSummary};
use crate::state::AppState;
use crate::utils::errors::{AppError, redirect_response};

/// Gate for the admin area: authenticated with role `admin`.
///
/// The `require_auth` layer guarantees a bound session here; a caller with
/// an insufficient role is sent to the fallback page rather than an error
/// page.
pub fn require_admin(state: &AppState) -> Result<Session, AppError> {
    let session = require_user()?;
    if !session.user.is_admin() {
        tracing::debug!(user = %session.user.email, "non-admin on admin route");
        return Err(AppError::redirect_to(
            state.auth_config.fallback_path.clone(),
        ));
    }
    Ok(session)
}

/// The admin index forwards straight to the dashboard.
pub async fn admin_index(State(state): State<AppState>) -> Result<Response, AppError> {
    require_admin(&state)?;
    Ok(redirect_response("/admin/dashboard"))
}

pub async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardSummary>, AppError> {
    let session = require_admin(&state)?;

    Ok(Json(DashboardSummary {
        user: session.user,
        account_count: ACCOUNTS.len(),
        total_balance: ACCOUNTS.iter().map(|account| account.balance).sum(),
        generated_at: Utc::now(),
    }))
}

pub async fn get_accounts(
    State(state): State<AppState>,
) -> Result<Json<Vec<AccountSummary>>, AppError> {
    require_admin(&state)?;
    Ok(Json(ACCOUNTS.to_vec()))
}

pub async fn get_account(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
) -> Result<Json<AccountSummary>, AppError> {
    require_admin(&state)?;

    ACCOUNTS
        .iter()
        .find(|account| account.id == account_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("no such account: {account_id}")))
}
