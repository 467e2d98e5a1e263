use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One open bug as returned by the tracker's REST endpoint. Extra fields in
/// the payload (status and friends) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: u64,
    pub creator: String,
    pub summary: String,
}

/// Bugs assigned per team key. Holds one entry for every active member, even
/// when that member ended up with nothing. Rebuilt from scratch on every run.
pub type Assignment = BTreeMap<String, Vec<Ticket>>;

/// The rendered announcement email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub to: Vec<String>,
    pub subject: String,
    pub body: String,
}

impl Report {
    pub fn to_text(&self) -> String {
        format!(
            "To: {}\n\nSubject: {}\n\n{}",
            self.to.join(", "),
            self.subject,
            self.body
        )
    }
}
