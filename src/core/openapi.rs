use utoipa::{Modify, OpenApi};

use crate::features::areas::{dtos as areas_dtos, handlers as areas_handlers};
use crate::features::cabang::{
    dtos as cabang_dtos, handlers as cabang_handlers, models as cabang_models,
};
use crate::features::companies::{
    dtos as companies_dtos, handlers as companies_handlers, models as companies_models,
};
use crate::features::dashboard::{dtos as dashboard_dtos, handlers as dashboard_handlers};
use crate::features::developers::{
    dtos as developers_dtos, handlers as developers_handlers, models as developers_models,
};
use crate::features::search::{dtos as search_dtos, handlers as search_handlers};
use crate::features::visits::{
    dtos as visits_dtos, handlers as visits_handlers, models as visits_models,
};
use crate::shared::types::{ApiResponse, PaginatedResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Public map surface
        areas_handlers::area_handler::list_areas,
        areas_handlers::area_handler::get_area_tree,
        areas_handlers::area_handler::get_branch_tree,
        developers_handlers::developer_handler::list_developers_by_cabang,
        search_handlers::search_handler::search,
        // Dashboard
        dashboard_handlers::dashboard_handler::region,
        dashboard_handlers::dashboard_handler::statistics,
        // Visits
        visits_handlers::visit_handler::list_visits,
        visits_handlers::visit_handler::create_visit,
        visits_handlers::visit_handler::update_visit,
        visits_handlers::visit_handler::delete_visit,
        visits_handlers::visit_handler::developer_status,
        visits_handlers::visit_handler::developer_detail,
        // Admin: areas
        areas_handlers::area_handler::create_area,
        areas_handlers::area_handler::update_area,
        areas_handlers::area_handler::delete_area,
        // Admin: cabang
        cabang_handlers::cabang_handler::list_cabang,
        cabang_handlers::cabang_handler::paginate_cabang,
        cabang_handlers::cabang_handler::get_cabang,
        cabang_handlers::cabang_handler::create_cabang,
        cabang_handlers::cabang_handler::update_cabang,
        cabang_handlers::cabang_handler::delete_cabang,
        // Admin: developers
        developers_handlers::developer_handler::list_developers,
        developers_handlers::developer_handler::paginate_developers,
        developers_handlers::developer_handler::get_developer,
        developers_handlers::developer_handler::create_developer,
        developers_handlers::developer_handler::update_developer,
        developers_handlers::developer_handler::delete_developer,
        // Admin: K1 companies
        companies_handlers::company_handler::list_companies,
        companies_handlers::company_handler::paginate_companies,
        companies_handlers::company_handler::get_company,
        companies_handlers::company_handler::create_company,
        companies_handlers::company_handler::update_company,
        companies_handlers::company_handler::delete_company,
    ),
    components(
        schemas(
            // Areas
            areas_dtos::AreaResponseDto,
            areas_dtos::AreaPayloadDto,
            areas_dtos::AreaTree,
            areas_dtos::BranchNode,
            areas_dtos::DeveloperNode,
            areas_dtos::CompanyNode,
            // Cabang
            cabang_models::Cabang,
            cabang_dtos::CreateCabangDto,
            cabang_dtos::UpdateCabangDto,
            // Developers
            developers_models::Developer,
            developers_dtos::DeveloperPayloadDto,
            // Companies
            companies_models::PerusahaanK1,
            companies_dtos::CompanyPayloadDto,
            // Visits
            visits_models::Visit,
            visits_dtos::UpdateVisitDto,
            visits_dtos::DeveloperDetailDto,
            visits_dtos::DeveloperStatusDto,
            visits_dtos::StatusMarker,
            // Search
            search_dtos::SearchHit,
            // Dashboard
            dashboard_dtos::Statistics,
            dashboard_dtos::Viewport,
            dashboard_dtos::RegionTreeDto,
            // Envelopes
            ApiResponse<Vec<areas_dtos::AreaResponseDto>>,
            ApiResponse<areas_dtos::AreaResponseDto>,
            ApiResponse<areas_dtos::AreaTree>,
            ApiResponse<areas_dtos::BranchNode>,
            ApiResponse<Vec<cabang_models::Cabang>>,
            ApiResponse<cabang_models::Cabang>,
            PaginatedResponse<cabang_models::Cabang>,
            ApiResponse<Vec<developers_models::Developer>>,
            ApiResponse<developers_models::Developer>,
            PaginatedResponse<developers_models::Developer>,
            ApiResponse<Vec<companies_models::PerusahaanK1>>,
            ApiResponse<companies_models::PerusahaanK1>,
            PaginatedResponse<companies_models::PerusahaanK1>,
            ApiResponse<Vec<visits_models::Visit>>,
            ApiResponse<visits_models::Visit>,
            ApiResponse<visits_dtos::DeveloperDetailDto>,
            ApiResponse<Vec<visits_dtos::DeveloperStatusDto>>,
            ApiResponse<Vec<search_dtos::SearchHit>>,
            ApiResponse<dashboard_dtos::RegionTreeDto>,
            ApiResponse<dashboard_dtos::Statistics>,
        )
    ),
    tags(
        (name = "areas", description = "Areas and assembled trees"),
        (name = "public", description = "Map data: developers and search"),
        (name = "dashboard", description = "Region-wide aggregation and statistics"),
        (name = "visits", description = "Developer visit log and marker status"),
        (name = "admin", description = "CRUD and paginated listings for all entities"),
    ),
    info(
        title = "Sebaran API",
        version = "0.1.0",
        description = "API documentation for Sebaran",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
