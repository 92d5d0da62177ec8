pub mod cabang_handler;

pub use cabang_handler::*;
