pub mod cli;
pub mod team;

pub use cli::CliConfig;
pub use team::{Member, Team};
