pub mod cabang;

pub use cabang::Cabang;
