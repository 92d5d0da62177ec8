use axum::{
    extract::DefaultBodyLimit,
    routing::{get, put},
    Router,
};

use crate::features::visits::handlers::{self, VisitState};

/// Public visit routes. The multipart create route gets its own body limit
/// sized for the photo upload.
pub fn routes(state: VisitState, max_upload_size: usize) -> Router {
    Router::new()
        .route(
            "/api/developer-visits",
            get(handlers::list_visits)
                .post(handlers::create_visit)
                .layer(DefaultBodyLimit::max(max_upload_size + 1024 * 1024)),
        )
        .route(
            "/api/developer-visits/{id_visit}",
            put(handlers::update_visit).delete(handlers::delete_visit),
        )
        .route("/api/developer-status", get(handlers::developer_status))
        .route("/api/developer-detail", get(handlers::developer_detail))
        .with_state(state)
}
