pub mod cabang_dto;

pub use cabang_dto::{CreateCabangDto, UpdateCabangDto};
