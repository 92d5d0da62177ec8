pub mod status_row;
pub mod visit;

pub use status_row::DeveloperStatusRow;
pub use visit::Visit;
