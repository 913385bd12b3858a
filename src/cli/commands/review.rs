//! The review pipeline: fetch, filter, rank, render

use std::fs;
use std::path::Path;

use next_review::config::Settings;
use next_review::gerrit;
use next_review::models::ChangeRecord;
use next_review::output::{OutputMode, ReviewList};
use next_review::ranker::RankPolicy;

/// Fetch open changes, rank them, and print the next review (or the list)
///
/// Returns the count of actionable reviews, saturated to the exit-status
/// range.
pub fn review(
    settings: &Settings,
    list: bool,
    ignore_file: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<u8> {
    let mut changes = gerrit::fetch_changes(settings)?;
    log::debug!("fetched {} open change(s)", changes.len());

    if let Some(path) = ignore_file {
        changes = drop_ignored(changes, path, &settings.host)?;
    }

    let policy = RankPolicy {
        gate_system: settings.gate_system.clone(),
        smoke_system: settings.smoke_system.clone(),
    };
    let ranked = policy.rank(changes);

    ReviewList::from_ranked(&ranked, &settings.host, list).render(mode);

    Ok(u8::try_from(ranked.len()).unwrap_or(u8::MAX))
}

/// Drop changes whose URL appears in the ignore file
fn drop_ignored(
    changes: Vec<ChangeRecord>,
    path: &Path,
    host: &str,
) -> anyhow::Result<Vec<ChangeRecord>> {
    let content = fs::read_to_string(path)?;
    let ignored: Vec<&str> = content.split_whitespace().collect();

    Ok(changes
        .into_iter()
        .filter(|change| !ignored.contains(&change.url(host).as_str()))
        .collect())
}
