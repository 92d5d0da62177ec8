//! Cross-entity marker search across developers and K1 companies.

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::SearchService;
