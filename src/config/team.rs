use crate::utils::error::Result;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// One entry in the team roster. The `disabled` field holds the away reason
/// when the member is sitting this round out, matching the team.json format:
///
/// ```json
/// {
///     "alice": { "email": "alice@example.com" },
///     "bob": { "email": "bob@example.com", "disabled": "On PTO until March" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Member {
    pub email: String,
    #[serde(default)]
    pub disabled: Option<String>,
}

impl Member {
    pub fn is_active(&self) -> bool {
        self.disabled.is_none()
    }
}

/// The triage roster, keyed by a short member handle. Read-only during a run.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Team {
    members: BTreeMap<String, Member>,
}

impl Team {
    pub fn new(members: BTreeMap<String, Member>) -> Self {
        Self { members }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let team = serde_json::from_str(&raw)?;
        Ok(team)
    }

    pub fn members(&self) -> impl Iterator<Item = (&String, &Member)> {
        self.members.iter()
    }

    pub fn get(&self, key: &str) -> Option<&Member> {
        self.members.get(key)
    }

    pub fn active_keys(&self) -> Vec<&str> {
        self.members
            .iter()
            .filter(|(_, member)| member.is_active())
            .map(|(key, _)| key.as_str())
            .collect()
    }

    pub fn active_emails(&self) -> Vec<&str> {
        self.members
            .iter()
            .filter(|(_, member)| member.is_active())
            .map(|(_, member)| member.email.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
