pub mod contributions;

pub use contributions::*;
