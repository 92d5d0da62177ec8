use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::companies::handlers;
use crate::features::companies::services::CompanyService;

/// Admin K1 company routes, nested under /api/admin.
/// The paginate route must come before the {id_k1} route.
pub fn admin_routes(service: Arc<CompanyService>) -> Router {
    Router::new()
        .route(
            "/k1",
            get(handlers::list_companies).post(handlers::create_company),
        )
        .route("/k1/paginate", get(handlers::paginate_companies))
        .route(
            "/k1/{id_k1}",
            get(handlers::get_company)
                .put(handlers::update_company)
                .delete(handlers::delete_company),
        )
        .with_state(service)
}
