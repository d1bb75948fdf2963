use axum::{Router, routing::get};

use crate::modules::auth::controller::sign_in;
use crate::state::AppState;

pub fn init_auth_router() -> Router<AppState> {
    Router::new().route("/sign-in", get(sign_in))
}
