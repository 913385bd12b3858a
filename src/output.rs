//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text (one colored line per review) or machine-parseable
//! JSON.

use colored::Colorize;
use serde::Serialize;

use crate::models::ChangeRecord;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// One renderable review line
#[derive(Debug, Serialize)]
pub struct ReviewLine {
    /// Review URL (`https://<host>/<number>`)
    pub url: String,
    /// Repository the change targets
    pub project: String,
    /// Short human-readable title
    pub subject: String,
}

/// The ranked result, ready to render
#[derive(Debug, Serialize)]
pub struct ReviewList {
    /// Lines to print: one in single mode, all in list mode
    pub reviews: Vec<ReviewLine>,
    /// Total actionable count; drives the process exit status
    pub total: usize,
}

impl ReviewList {
    /// Build from ranked changes
    ///
    /// Single mode keeps only the top change but still reports the full
    /// count; list mode keeps the whole ranking.
    #[must_use]
    pub fn from_ranked(ranked: &[ChangeRecord], host: &str, list: bool) -> Self {
        let shown = if list { ranked.len() } else { ranked.len().min(1) };
        let reviews = ranked[..shown]
            .iter()
            .map(|change| ReviewLine {
                url: change.url(host),
                project: change.project.clone(),
                subject: change.subject.trim().to_string(),
            })
            .collect();

        Self {
            reviews,
            total: ranked.len(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.reviews.is_empty() {
            println!("Nothing to review!");
            return;
        }

        for line in &self.reviews {
            println!("{} {} {}", line.url.blue(), line.project.yellow(), line.subject);
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
