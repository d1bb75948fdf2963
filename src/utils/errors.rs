use anyhow::Error;
use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application error carried through middleware and handler `Result`s.
///
/// A redirect is an error value here: an authorization failure aborts the
/// pipeline through the same channel as any other failure, and the
/// transport layer renders it as a `Location` response instead of a JSON
/// error body.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
    location: Option<String>,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
            location: None,
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn bad_gateway<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_GATEWAY, err)
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::NOT_FOUND, err)
    }

    /// Aborts the current pipeline with a `302 Found` to `location`.
    pub fn redirect_to(location: impl Into<String>) -> Self {
        let location = location.into();
        Self {
            status: StatusCode::FOUND,
            error: anyhow::anyhow!("redirect to {location}"),
            location: Some(location),
        }
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}

/// Plain `302 Found` response, for handlers whose normal outcome is a
/// redirect rather than an aborted pipeline.
pub fn redirect_response(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(location) = self.location.as_deref() {
            return (self.status, [(header::LOCATION, location.to_string())]).into_response();
        }

        if self.status.is_server_error() {
            tracing::error!(status = %self.status.as_u16(), "request failed: {:#}", self.error);
        }

        let body = Json(json!({
            "error": self.error.to_string()
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}
