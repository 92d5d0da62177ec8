pub mod area_handler;

pub use area_handler::*;
