use crate::config::team::Team;
use crate::domain::model::{Assignment, Ticket};
use crate::utils::error::{Result, TriageError};
use clap::ValueEnum;
use rand::seq::SliceRandom;
use rand::Rng;

/// Round robin gives up after this many voided permutations.
pub const MAX_ROUND_ROBIN_ATTEMPTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Strict least-loaded selection with a uniform random tie-break.
    LeastLoaded,
    /// Sampling weighted against members who already hold more bugs.
    WeightedRandom,
    /// Random permutation round robin, retried on creator collisions.
    RoundRobin,
}

/// Splits a batch of bugs across the active team without ever handing a bug
/// to its own creator. The random source is injected so runs can be replayed
/// with a fixed seed.
#[derive(Debug, Clone)]
pub struct Distributor {
    strategy: Strategy,
}

impl Default for Distributor {
    fn default() -> Self {
        Self::new(Strategy::LeastLoaded)
    }
}

impl Distributor {
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }

    pub fn distribute<R: Rng>(
        &self,
        tickets: &[Ticket],
        team: &Team,
        rng: &mut R,
    ) -> Result<Assignment> {
        let active = team.active_keys();

        if tickets.is_empty() {
            return Ok(empty_assignment(&active));
        }
        if active.is_empty() {
            return Err(TriageError::NoEligibleRecipient {
                ticket_id: tickets[0].id,
            });
        }

        match self.strategy {
            Strategy::LeastLoaded => least_loaded(tickets, team, &active, rng),
            Strategy::WeightedRandom => weighted_random(tickets, team, &active, rng),
            Strategy::RoundRobin => round_robin(tickets, team, &active, rng),
        }
    }
}

fn empty_assignment(active: &[&str]) -> Assignment {
    active.iter().map(|key| (key.to_string(), Vec::new())).collect()
}

/// Active members allowed to take this bug: everyone but its creator.
fn eligible_members<'a>(ticket: &Ticket, team: &Team, active: &[&'a str]) -> Vec<&'a str> {
    active
        .iter()
        .copied()
        .filter(|key| {
            team.get(key)
                .map(|member| member.email != ticket.creator)
                .unwrap_or(false)
        })
        .collect()
}

/// Each bug goes to whoever currently holds the fewest, picking uniformly at
/// random among ties so the first-listed members are not favored. Final
/// counts differ by at most one unless creator exclusion forces a gap.
fn least_loaded<R: Rng>(
    tickets: &[Ticket],
    team: &Team,
    active: &[&str],
    rng: &mut R,
) -> Result<Assignment> {
    let mut assignment = empty_assignment(active);

    for ticket in tickets {
        let eligible = eligible_members(ticket, team, active);
        if eligible.is_empty() {
            return Err(TriageError::NoEligibleRecipient { ticket_id: ticket.id });
        }

        let min_count = eligible
            .iter()
            .map(|key| assignment[*key].len())
            .min()
            .unwrap_or(0);
        let tied: Vec<&str> = eligible
            .into_iter()
            .filter(|key| assignment[*key].len() == min_count)
            .collect();

        let chosen = tied[rng.random_range(0..tied.len())];
        assignment
            .entry(chosen.to_string())
            .or_default()
            .push(ticket.clone());
    }

    Ok(assignment)
}

/// Looser probabilistic balance: member weight decays with the share of the
/// processed bugs they already hold.
fn weighted_random<R: Rng>(
    tickets: &[Ticket],
    team: &Team,
    active: &[&str],
    rng: &mut R,
) -> Result<Assignment> {
    let mut assignment = empty_assignment(active);

    for (processed, ticket) in tickets.iter().enumerate() {
        let eligible = eligible_members(ticket, team, active);
        if eligible.is_empty() {
            return Err(TriageError::NoEligibleRecipient { ticket_id: ticket.id });
        }

        // count <= processed, so every weight stays strictly positive.
        let weights: Vec<f64> = eligible
            .iter()
            .map(|key| 1.0 - assignment[*key].len() as f64 / (processed as f64 + 1.0))
            .collect();
        let total: f64 = weights.iter().sum();

        let mut pick = rng.random_range(0.0..total);
        let mut chosen = eligible[eligible.len() - 1];
        for (key, weight) in eligible.iter().zip(&weights) {
            if pick < *weight {
                chosen = *key;
                break;
            }
            pick -= weight;
        }

        assignment
            .entry(chosen.to_string())
            .or_default()
            .push(ticket.clone());
    }

    Ok(assignment)
}

/// Bug i goes to position i mod team size of a random permutation. Any bug
/// landing on its own creator voids the whole attempt; a fresh permutation is
/// drawn up to the attempt budget. With fewer bugs than members some members
/// simply get nothing.
fn round_robin<R: Rng>(
    tickets: &[Ticket],
    team: &Team,
    active: &[&str],
    rng: &mut R,
) -> Result<Assignment> {
    for attempt in 1..=MAX_ROUND_ROBIN_ATTEMPTS {
        let mut order: Vec<&str> = active.to_vec();
        order.shuffle(rng);

        let mut assignment = empty_assignment(active);
        let mut placed_all = true;

        for (index, ticket) in tickets.iter().enumerate() {
            let key = order[index % order.len()];
            let creator_collision = team
                .get(key)
                .map(|member| member.email == ticket.creator)
                .unwrap_or(false);
            if creator_collision {
                tracing::debug!(
                    "attempt {}: bug {} landed on its creator, reshuffling",
                    attempt,
                    ticket.id
                );
                placed_all = false;
                break;
            }
            assignment
                .entry(key.to_string())
                .or_default()
                .push(ticket.clone());
        }

        if placed_all {
            return Ok(assignment);
        }
    }

    Err(TriageError::RetryBudgetExhausted {
        attempts: MAX_ROUND_ROBIN_ATTEMPTS,
    })
}
