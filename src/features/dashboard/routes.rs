use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::dashboard::handlers;
use crate::features::dashboard::services::DashboardService;

pub fn routes(service: Arc<DashboardService>) -> Router {
    Router::new()
        .route("/api/dashboard/region", get(handlers::region))
        .route("/api/dashboard/statistics", get(handlers::statistics))
        .with_state(service)
}
