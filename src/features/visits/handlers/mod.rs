pub mod visit_handler;

pub use visit_handler::*;
