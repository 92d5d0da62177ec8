pub mod cabang_service;

pub use cabang_service::CabangService;
