use axum::http::{HeaderValue, Method};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;

use crate::logging::logging_middleware;
use crate::middleware::auth::{load_session, require_auth};
use crate::modules::admin::router::init_admin_router;
use crate::modules::auth::router::init_auth_router;
use crate::modules::home::router::init_home_router;
use crate::modules::settings::router::init_settings_router;
use crate::state::AppState;

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(
            init_home_router()
                .route_layer(middleware::from_fn_with_state(state.clone(), load_session)),
        )
        .nest(
            "/auth",
            init_auth_router()
                .route_layer(middleware::from_fn_with_state(state.clone(), load_session)),
        )
        .nest(
            "/settings",
            // The outer layout loads the session; the settings layout
            // narrows to login-required, rebinding inside the outer scope.
            init_settings_router()
                .route_layer(middleware::from_fn_with_state(state.clone(), require_auth))
                .route_layer(middleware::from_fn_with_state(state.clone(), load_session)),
        )
        .nest(
            "/admin",
            init_admin_router()
                .route_layer(middleware::from_fn_with_state(state.clone(), require_auth)),
        )
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(logging_middleware))
}
