pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{CliConfig, Member, Team};
pub use core::distribute::{Distributor, Strategy};
pub use core::engine::TriageEngine;
pub use core::pipeline::TriagePipeline;
pub use domain::model::{Assignment, Report, Ticket};
pub use utils::error::{Result, TriageError};
