//! Gerrit response decoding
//!
//! `gerrit query --format=JSON` emits one JSON object per line with a
//! trailing stats row. Approvals on the current patch set carry the CI
//! verdicts and any blocking review votes; everything else this tool needs
//! sits directly on the change object.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use super::GerritError;
use crate::models::{ChangeRecord, CiVerdict};

/// A blocking core-reviewer vote
const BLOCKING_REVIEW_VALUE: i8 = -2;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawChange {
    #[serde(deserialize_with = "number_from_string_or_int")]
    number: u64,
    subject: String,
    project: String,
    created_on: i64,
    last_updated: i64,
    #[serde(default)]
    wip: bool,
    #[serde(default)]
    current_patch_set: Option<RawPatchSet>,
}

#[derive(Debug, Deserialize)]
struct RawPatchSet {
    #[serde(default)]
    approvals: Vec<RawApproval>,
}

#[derive(Debug, Deserialize)]
struct RawApproval {
    #[serde(rename = "type")]
    kind: String,
    value: String,
    #[serde(default)]
    by: RawAccount,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawAccount {
    username: Option<String>,
    email: Option<String>,
}

impl RawAccount {
    fn name(&self) -> Option<&str> {
        self.username.as_deref().or(self.email.as_deref())
    }
}

/// Old gerrit servers quote the change number, newer ones emit an integer
fn number_from_string_or_int<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberRep {
        Int(u64),
        Text(String),
    }

    match NumberRep::deserialize(deserializer)? {
        NumberRep::Int(n) => Ok(n),
        NumberRep::Text(s) => s.parse().map_err(serde::de::Error::custom),
    }
}

/// Decode a newline-delimited query response into change records
///
/// The stats row is dropped; every other line must decode, or the whole
/// fetch fails. The ranker is never handed partial data.
pub fn decode_changes(response: &str) -> Result<Vec<ChangeRecord>, GerritError> {
    let mut changes = Vec::new();

    for line in response.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let value: serde_json::Value = serde_json::from_str(line).map_err(|source| {
            GerritError::Decode {
                line: line.to_string(),
                source,
            }
        })?;

        if value.get("type").and_then(serde_json::Value::as_str) == Some("stats") {
            continue;
        }

        let raw: RawChange = serde_json::from_value(value).map_err(|source| {
            GerritError::Decode {
                line: line.to_string(),
                source,
            }
        })?;

        changes.push(decode_change(raw)?);
    }

    Ok(changes)
}

fn decode_change(raw: RawChange) -> Result<ChangeRecord, GerritError> {
    let mut ci_verdicts = HashMap::new();
    let mut review_blocked = false;

    if let Some(patch_set) = &raw.current_patch_set {
        for approval in &patch_set.approvals {
            let Ok(value) = approval.value.parse::<i8>() else {
                continue;
            };

            match approval.kind.as_str() {
                "Verified" => {
                    // A zero vote carries no verdict
                    if value == 0 {
                        continue;
                    }
                    if let Some(name) = approval.by.name() {
                        let verdict = if value < 0 {
                            CiVerdict::Failing
                        } else {
                            CiVerdict::Passing
                        };
                        ci_verdicts.insert(name.to_string(), verdict);
                    }
                },
                "Code-Review" if value <= BLOCKING_REVIEW_VALUE => review_blocked = true,
                _ => {},
            }
        }
    }

    Ok(ChangeRecord {
        number: raw.number,
        subject: raw.subject,
        project: raw.project,
        created_on: timestamp(raw.created_on)?,
        last_updated: timestamp(raw.last_updated)?,
        ci_verdicts,
        work_in_progress: raw.wip,
        review_blocked,
    })
}

fn timestamp(epoch_seconds: i64) -> Result<DateTime<Utc>, GerritError> {
    DateTime::from_timestamp(epoch_seconds, 0).ok_or(GerritError::Timestamp(epoch_seconds))
}
