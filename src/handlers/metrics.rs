use axum::response::IntoResponse;
use crate::handlers::ApiError;

pub async fn metrics_handler() -> Result<impl IntoResponse, ApiError> {
    crate::metrics::render().map_err(ApiError::internal)
}
