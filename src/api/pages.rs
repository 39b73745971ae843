use axum::{extract::State, http::Uri, response::Html};
use std::io;
use std::path::Path;

use crate::api::error::ApiError;
use crate::api::AppState;

/// GET / - Front page
///
/// Serves `index.html` from the configured static files directory. This is
/// the endpoint the load test hammers.
pub async fn front_page(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let path = Path::new(&state.cfg.static_files.directory).join("index.html");

    match tokio::fs::read_to_string(&path).await {
        Ok(body) => Ok(Html(body)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(ApiError::NotFound("front page".to_string()))
        }
        Err(e) => Err(ApiError::InternalError(e.to_string())),
    }
}

/// Fallback handler for routes (and static files) with no registered handler.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
