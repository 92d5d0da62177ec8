pub mod status_dto;
pub mod visit_dto;

pub use status_dto::{DeveloperStatusDto, StatusMarker};
pub use visit_dto::{DeveloperDetailDto, UpdateVisitDto, VisitQuery};
