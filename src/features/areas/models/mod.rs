pub mod area;
pub mod tree_row;

pub use area::Area;
pub use tree_row::{AreaTreeRow, BranchTreeRow};
