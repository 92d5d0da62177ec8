use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::developers::handlers;
use crate::features::developers::services::DeveloperService;

/// Public developer routes
pub fn routes(service: Arc<DeveloperService>) -> Router {
    Router::new()
        .route(
            "/api/developers/{kode_cabang}",
            get(handlers::list_developers_by_cabang),
        )
        .with_state(service)
}

/// Admin developer routes, nested under /api/admin.
/// The paginate route must come before the {id_developer} route.
pub fn admin_routes(service: Arc<DeveloperService>) -> Router {
    Router::new()
        .route(
            "/developers",
            get(handlers::list_developers).post(handlers::create_developer),
        )
        .route("/developers/paginate", get(handlers::paginate_developers))
        .route(
            "/developers/{id_developer}",
            get(handlers::get_developer)
                .put(handlers::update_developer)
                .delete(handlers::delete_developer),
        )
        .with_state(service)
}
