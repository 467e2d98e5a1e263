use crate::domain::model::Report;
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

/// Runs one fetch -> distribute -> render pass. Returns None when the tracker
/// had nothing to triage, so the caller can skip the announcement entirely.
pub struct TriageEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> TriageEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<Option<Report>> {
        let tickets = self.pipeline.fetch().await?;

        if tickets.is_empty() {
            tracing::info!("No bugs for triage! \\o/");
            return Ok(None);
        }
        tracing::info!("There are {} bugs to triage", tickets.len());

        let assignment = self.pipeline.distribute(tickets)?;
        tracing::info!("Distribution completed");

        let report = self.pipeline.render(&assignment)?;
        Ok(Some(report))
    }
}
