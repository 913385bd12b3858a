//! Gerrit query construction
//!
//! Builds the search terms for "open changes I can review". The query
//! language itself belongs to gerrit; this module only assembles terms.

/// Build the search terms for the configured projects and user
///
/// With no projects configured the query falls back to the user's watched
/// and starred changes. When a username is known the owner clause keeps the
/// user's own changes out of the result server-side.
#[must_use]
pub fn build_query(projects: &[String], username: Option<&str>) -> Vec<String> {
    let project_clause = if projects.is_empty() {
        "(is:watched OR is:starred)".to_string()
    } else {
        let terms: Vec<String> = projects.iter().map(|p| format!("project:{p}")).collect();
        format!("({})", terms.join(" OR "))
    };

    let mut query = vec![project_clause, "is:open".to_string(), "limit:1000".to_string()];

    if let Some(user) = username {
        query.push(format!("NOT owner:{user}"));
    }

    query
}
