use axum::{Router, routing::get};

use crate::modules::settings::controller::get_account_settings;
use crate::state::AppState;

pub fn init_settings_router() -> Router<AppState> {
    Router::new().route("/account", get(get_account_settings))
}
