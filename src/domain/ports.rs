use crate::core::distribute::Strategy;
use crate::domain::model::{Assignment, Report, Ticket};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn rest_url(&self) -> &str;
    fn skip_bugs(&self) -> &[u64];
    fn strategy(&self) -> Strategy;
    fn seed(&self) -> Option<u64>;
}

/// The three stages of a triage run. Only the fetch touches the network;
/// distribution and rendering are pure and synchronous.
#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Ticket>>;
    fn distribute(&self, tickets: Vec<Ticket>) -> Result<Assignment>;
    fn render(&self, assignment: &Assignment) -> Result<Report>;
}
