use crate::config::team::Team;
use crate::core::distribute::Distributor;
use crate::core::report;
use crate::domain::model::{Assignment, Report, Ticket};
use crate::domain::ports::{ConfigProvider, Pipeline};
use crate::utils::error::{Result, TriageError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use reqwest::Client;

pub struct TriagePipeline<C: ConfigProvider> {
    config: C,
    team: Team,
    distributor: Distributor,
    client: Client,
}

impl<C: ConfigProvider> TriagePipeline<C> {
    pub fn new(team: Team, config: C) -> Self {
        let distributor = Distributor::new(config.strategy());
        Self {
            config,
            team,
            distributor,
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> Pipeline for TriagePipeline<C> {
    async fn fetch(&self) -> Result<Vec<Ticket>> {
        tracing::debug!("Making request to Bugzilla...");
        tracing::info!("LIST: {}", self.config.rest_url());

        let response = self.client.get(self.config.rest_url()).send().await?;
        tracing::debug!("API response status: {}", response.status());

        if !response.status().is_success() {
            return Err(TriageError::InvalidResponse {
                message: format!("ticket source returned HTTP {}", response.status()),
            });
        }

        let data: serde_json::Value = response.json().await?;
        let bugs = data
            .get("bugs")
            .cloned()
            .ok_or_else(|| TriageError::InvalidResponse {
                message: "response body made no sense, no 'bugs' array".to_string(),
            })?;
        let mut tickets: Vec<Ticket> = serde_json::from_value(bugs)?;

        let skip = self.config.skip_bugs();
        if !skip.is_empty() {
            let before = tickets.len();
            tickets.retain(|ticket| !skip.contains(&ticket.id));
            tracing::debug!("Skipped {} bug(s) by request", before - tickets.len());
        }

        Ok(tickets)
    }

    fn distribute(&self, tickets: Vec<Ticket>) -> Result<Assignment> {
        let mut rng = match self.config.seed() {
            Some(seed) => {
                tracing::debug!("Using fixed RNG seed {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        };
        self.distributor.distribute(&tickets, &self.team, &mut rng)
    }

    fn render(&self, assignment: &Assignment) -> Result<Report> {
        Ok(report::render(&self.team, assignment))
    }
}
