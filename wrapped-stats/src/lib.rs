pub mod grid;
pub mod models;
pub mod stats;

pub use grid::*;
pub use models::*;
pub use stats::*;
