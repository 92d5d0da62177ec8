pub mod status_overlay;
pub mod visit_service;

pub use visit_service::VisitService;
