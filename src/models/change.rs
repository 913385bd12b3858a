//! Change model
//!
//! A `ChangeRecord` is an immutable snapshot of one open review, decoded
//! from gerrit's query output. The ranker only filters and reorders these;
//! nothing downstream mutates them.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Tri-state verdict from a CI system
///
/// An explicit enum rather than an optional boolean: a system that has not
/// voted yet is neutral, and must never be read as failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CiVerdict {
    /// The system voted against the change
    Failing,
    /// The system voted for the change
    Passing,
    /// The system has not voted on this change
    #[default]
    NotRun,
}

impl CiVerdict {
    /// Whether this verdict demotes the change in the ranking
    #[must_use]
    pub const fn is_failing(self) -> bool {
        matches!(self, Self::Failing)
    }
}

impl std::fmt::Display for CiVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Failing => write!(f, "failing"),
            Self::Passing => write!(f, "passing"),
            Self::NotRun => write!(f, "not-run"),
        }
    }
}

/// One open review, snapshotted at fetch time
#[derive(Debug, Clone, Serialize)]
pub struct ChangeRecord {
    /// Gerrit change number; unique within a fetch, used to build the URL
    pub number: u64,

    /// Short human-readable title
    pub subject: String,

    /// Repository the change targets
    pub project: String,

    /// When the change was created
    pub created_on: DateTime<Utc>,

    /// When the change was last touched
    pub last_updated: DateTime<Utc>,

    /// CI verdicts keyed by the voting account name
    pub ci_verdicts: HashMap<String, CiVerdict>,

    /// Author marked the change as not ready for review
    pub work_in_progress: bool,

    /// A core reviewer cast a blocking -2 vote
    pub review_blocked: bool,
}

impl ChangeRecord {
    /// Verdict cast by the named CI system, `NotRun` if it has not voted
    #[must_use]
    pub fn verdict_for(&self, system: &str) -> CiVerdict {
        self.ci_verdicts.get(system).copied().unwrap_or_default()
    }

    /// Review URL on the given host
    #[must_use]
    pub fn url(&self, host: &str) -> String {
        format!("https://{host}/{}", self.number)
    }
}
