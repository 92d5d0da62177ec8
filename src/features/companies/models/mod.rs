pub mod perusahaan_k1;

pub use perusahaan_k1::PerusahaanK1;
