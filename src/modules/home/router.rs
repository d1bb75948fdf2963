use axum::{Router, routing::get};

use crate::modules::home::controller::get_home;
use crate::state::AppState;

pub fn init_home_router() -> Router<AppState> {
    Router::new().route("/", get(get_home))
}
