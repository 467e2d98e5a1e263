use thiserror::Error;

#[derive(Error, Debug)]
pub enum TriageError {
    #[error("API request failed: {0}")]
    Api(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unexpected ticket source response: {message}")]
    InvalidResponse { message: String },

    #[error("No eligible triager for bug {ticket_id}")]
    NoEligibleRecipient { ticket_id: u64 },

    #[error("Could not place every bug within {attempts} attempts")]
    RetryBudgetExhausted { attempts: usize },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl TriageError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            TriageError::Api(_) => "Could not reach the bug tracker".to_string(),
            TriageError::Io(e) => format!("File operation failed: {}", e),
            TriageError::Serialization(_) => {
                "Could not parse data from the bug tracker or the team file".to_string()
            }
            TriageError::InvalidResponse { message } => {
                format!("The bug tracker response made no sense: {}", message)
            }
            TriageError::NoEligibleRecipient { ticket_id } => {
                format!("Nobody on the team is eligible to triage bug {}", ticket_id)
            }
            TriageError::RetryBudgetExhausted { attempts } => {
                format!("Gave up finding a fair rotation after {} attempts", attempts)
            }
            TriageError::InvalidConfigValue { field, reason, .. } => {
                format!("Configuration value for '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TriageError::Api(_) => "Check your network connection and the --rest-url value",
            TriageError::Io(_) => "Check that the path exists and is writable",
            TriageError::Serialization(_) => {
                "Check the team JSON file and the REST URL query parameters"
            }
            TriageError::InvalidResponse { .. } => {
                "Check that --rest-url points at a Bugzilla REST bug query"
            }
            TriageError::NoEligibleRecipient { .. } => {
                "Add more active team members or skip the bug with --skip-bugs"
            }
            TriageError::RetryBudgetExhausted { .. } => {
                "Use the least-loaded strategy, which handles creator collisions directly"
            }
            TriageError::InvalidConfigValue { .. } => "Fix the flagged command line option",
        }
    }
}

pub type Result<T> = std::result::Result<T, TriageError>;
