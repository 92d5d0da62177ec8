use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::features::areas::handlers;
use crate::features::areas::services::AreaService;

/// Public area routes consumed by the dashboard
pub fn routes(service: Arc<AreaService>) -> Router {
    Router::new()
        .route("/api/areas", get(handlers::list_areas))
        .route("/api/area/{kode_area}", get(handlers::get_area_tree))
        .route("/api/branch/{kode_cabang}", get(handlers::get_branch_tree))
        .with_state(service)
}

/// Admin CRUD routes, nested under /api/admin
pub fn admin_routes(service: Arc<AreaService>) -> Router {
    Router::new()
        .route("/areas", get(handlers::list_areas))
        .route("/area", post(handlers::create_area))
        .route(
            "/area/{kode_area}",
            put(handlers::update_area).delete(handlers::delete_area),
        )
        .with_state(service)
}
