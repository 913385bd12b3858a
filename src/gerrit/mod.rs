//! Gerrit query client
//!
//! Runs `gerrit query` over ssh and decodes the response. This is the only
//! part of the program that leaves the process; everything downstream works
//! on the decoded records. Credentials and host keys belong to the user's
//! ssh setup, not to this tool.

pub mod decode;
pub mod query;

use std::process::Command;

use thiserror::Error;

use crate::config::Settings;
use crate::models::ChangeRecord;

/// Errors from the fetch/decode boundary
#[derive(Debug, Error)]
pub enum GerritError {
    /// ssh could not be started at all
    #[error("failed to run ssh: {0}")]
    Spawn(#[from] std::io::Error),

    /// ssh ran but the query failed
    #[error("gerrit query failed: {stderr}")]
    Query {
        /// What ssh wrote to stderr
        stderr: String,
    },

    /// A response line was not a valid change record
    #[error("undecodable gerrit response line: {line}")]
    Decode {
        /// The offending line
        line: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// A change carried a timestamp outside the representable range
    #[error("timestamp out of range: {0}")]
    Timestamp(i64),
}

/// Fetch the open changes visible to the configured user
///
/// Spawns `ssh -p <port> [<user>@]<host> gerrit query ... --format=JSON`
/// and decodes the newline-delimited response.
pub fn fetch_changes(settings: &Settings) -> Result<Vec<ChangeRecord>, GerritError> {
    let terms = query::build_query(&settings.projects, settings.username.as_deref());
    log::debug!("querying {} with {terms:?}", settings.host);

    let output = Command::new("ssh")
        .arg("-p")
        .arg(settings.port.to_string())
        .arg(settings.destination())
        .arg("gerrit")
        .arg("query")
        .args(&terms)
        .args(["--current-patch-set", "--format=JSON"])
        .output()?;

    if !output.status.success() {
        return Err(GerritError::Query {
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    decode::decode_changes(&String::from_utf8_lossy(&output.stdout))
}
