pub mod constants;
pub mod geo;
pub mod types;
pub mod validation;
