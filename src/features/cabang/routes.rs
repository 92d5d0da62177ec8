use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::cabang::handlers;
use crate::features::cabang::services::CabangService;

/// Admin branch routes, nested under /api/admin.
/// The paginate route must come before the {kode_cabang} route.
pub fn admin_routes(service: Arc<CabangService>) -> Router {
    Router::new()
        .route(
            "/cabang",
            get(handlers::list_cabang).post(handlers::create_cabang),
        )
        .route("/cabang/paginate", get(handlers::paginate_cabang))
        .route(
            "/cabang/{kode_cabang}",
            get(handlers::get_cabang)
                .put(handlers::update_cabang)
                .delete(handlers::delete_cabang),
        )
        .with_state(service)
}
