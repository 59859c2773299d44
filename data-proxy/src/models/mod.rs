pub mod cli;
pub mod provider;
pub mod responses;

pub use cli::*;
pub use provider::*;
pub use responses::*;

pub use wrapped_stats::{ContributionDay, ErrorBody, GitHubData};
