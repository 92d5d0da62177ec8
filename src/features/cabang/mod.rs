//! Branch (cabang) administration: CRUD plus paginated, searchable listings.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CabangService;
