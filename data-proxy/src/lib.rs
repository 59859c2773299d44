pub mod config;
pub mod error;
pub mod external;
pub mod models;
pub mod routes;
pub mod state;

pub use config::*;
pub use error::*;
pub use models::*;
pub use routes::router;
pub use state::*;
