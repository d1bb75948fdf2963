use axum::{Router, routing::get};

use crate::modules::admin::controller::{admin_index, get_account, get_accounts, get_dashboard};
use crate::state::AppState;

pub fn init_admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(admin_index))
        .route("/dashboard", get(get_dashboard))
        .route("/accounts", get(get_accounts))
        .route("/accounts/{account_id}", get(get_account))
}
