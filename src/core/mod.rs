pub mod distribute;
pub mod engine;
pub mod pipeline;
pub mod report;

pub use crate::domain::model::{Assignment, Report, Ticket};
pub use crate::domain::ports::{ConfigProvider, Pipeline};
pub use crate::utils::error::Result;
