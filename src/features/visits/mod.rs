//! Developer visit log with photo upload and the traffic-light status
//! overlay derived from the latest visit per developer.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::VisitService;
