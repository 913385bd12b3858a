//! Tests for the change model

use std::collections::HashMap;

use chrono::{TimeZone, Utc};
use next_review::models::{ChangeRecord, CiVerdict};

fn make_change(number: u64) -> ChangeRecord {
    ChangeRecord {
        number,
        subject: "Fix token expiry".to_string(),
        project: "openstack/keystone".to_string(),
        created_on: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        last_updated: Utc.with_ymd_and_hms(2024, 3, 2, 12, 0, 0).unwrap(),
        ci_verdicts: HashMap::new(),
        work_in_progress: false,
        review_blocked: false,
    }
}

#[test]
fn verdict_defaults_to_not_run() {
    let change = make_change(331);
    assert_eq!(change.verdict_for("jenkins"), CiVerdict::NotRun);
}

#[test]
fn verdict_lookup_by_system_name() {
    let mut change = make_change(331);
    change.ci_verdicts.insert("jenkins".to_string(), CiVerdict::Failing);
    change.ci_verdicts.insert("smokestack".to_string(), CiVerdict::Passing);

    assert_eq!(change.verdict_for("jenkins"), CiVerdict::Failing);
    assert_eq!(change.verdict_for("smokestack"), CiVerdict::Passing);
    assert_eq!(change.verdict_for("zuul"), CiVerdict::NotRun);
}

#[test]
fn only_failing_is_failing() {
    assert!(CiVerdict::Failing.is_failing());
    assert!(!CiVerdict::Passing.is_failing());
    assert!(!CiVerdict::NotRun.is_failing());
}

#[test]
fn url_built_from_host_and_number() {
    let change = make_change(12345);
    assert_eq!(change.url("review.openstack.org"), "https://review.openstack.org/12345");
}

#[test]
fn verdict_display() {
    assert_eq!(CiVerdict::Failing.to_string(), "failing");
    assert_eq!(CiVerdict::Passing.to_string(), "passing");
    assert_eq!(CiVerdict::NotRun.to_string(), "not-run");
}
