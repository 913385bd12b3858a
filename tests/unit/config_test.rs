//! Tests for layered configuration

use std::fs;

use next_review::config::{ConfigFile, Overrides, Settings};
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, ConfigFile) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, content).unwrap();
    let file = ConfigFile::load(&path).unwrap();
    (temp, file)
}

// =============================================================================
// FILE LOADING
// =============================================================================

#[test]
fn missing_file_is_empty_config() {
    let temp = TempDir::new().unwrap();
    let file = ConfigFile::load(&temp.path().join("nope.toml")).unwrap();
    assert!(file.sections.is_empty());
}

#[test]
fn malformed_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "this is not toml [[[").unwrap();
    assert!(ConfigFile::load(&path).is_err());
}

#[test]
fn sections_are_parsed_by_name() {
    let (_temp, file) = write_config(
        r#"
[default]
host = "gerrit.example.com"

[work]
host = "gerrit.work.example.com"
port = 2222
"#,
    );

    assert_eq!(file.section("default").unwrap().host.as_deref(), Some("gerrit.example.com"));
    assert_eq!(file.section("work").unwrap().port, Some(2222));
    assert!(file.section("home").is_none());
}

// =============================================================================
// PRECEDENCE
// =============================================================================

#[test]
fn builtins_apply_with_no_config_at_all() {
    let settings = Settings::default();

    assert_eq!(settings.host, "review.openstack.org");
    assert_eq!(settings.port, 29418);
    assert_eq!(settings.username, None);
    assert!(settings.projects.is_empty());
    assert_eq!(settings.gate_system, "jenkins");
    assert_eq!(settings.smoke_system, "smokestack");
}

#[test]
fn default_section_overrides_builtins() {
    let (_temp, file) = write_config(
        r#"
[default]
host = "gerrit.example.com"
username = "alice"
projects = ["openstack/keystone"]
"#,
    );

    let settings = Settings::resolve(&file, None, Overrides::default());

    assert_eq!(settings.host, "gerrit.example.com");
    assert_eq!(settings.port, 29418);
    assert_eq!(settings.username.as_deref(), Some("alice"));
    assert_eq!(settings.projects, vec!["openstack/keystone".to_string()]);
}

#[test]
fn named_section_overrides_default_section() {
    let (_temp, file) = write_config(
        r#"
[default]
host = "gerrit.example.com"
username = "alice"

[work]
host = "gerrit.work.example.com"
"#,
    );

    let settings = Settings::resolve(&file, Some("work"), Overrides::default());

    // Named section wins where set, default section fills the rest
    assert_eq!(settings.host, "gerrit.work.example.com");
    assert_eq!(settings.username.as_deref(), Some("alice"));
}

#[test]
fn flags_override_every_layer() {
    let (_temp, file) = write_config(
        r#"
[default]
host = "gerrit.example.com"
port = 2222

[work]
host = "gerrit.work.example.com"
"#,
    );

    let overrides = Overrides {
        host: Some("cli.example.com".to_string()),
        port: Some(29419),
        username: Some("bob".to_string()),
        projects: vec!["openstack/nova".to_string()],
    };
    let settings = Settings::resolve(&file, Some("work"), overrides);

    assert_eq!(settings.host, "cli.example.com");
    assert_eq!(settings.port, 29419);
    assert_eq!(settings.username.as_deref(), Some("bob"));
    assert_eq!(settings.projects, vec!["openstack/nova".to_string()]);
}

#[test]
fn unknown_section_falls_through_to_default() {
    let (_temp, file) = write_config(
        r#"
[default]
host = "gerrit.example.com"
"#,
    );

    let settings = Settings::resolve(&file, Some("nonexistent"), Overrides::default());
    assert_eq!(settings.host, "gerrit.example.com");
}

#[test]
fn ci_account_names_are_configurable() {
    let (_temp, file) = write_config(
        r#"
[default]
gate_system = "zuul"
smoke_system = "third-party-ci"
"#,
    );

    let settings = Settings::resolve(&file, None, Overrides::default());
    assert_eq!(settings.gate_system, "zuul");
    assert_eq!(settings.smoke_system, "third-party-ci");
}

// =============================================================================
// DESTINATION
// =============================================================================

#[test]
fn destination_includes_username_when_known() {
    let mut settings = Settings::default();
    settings.username = Some("alice".to_string());
    assert_eq!(settings.destination(), "alice@review.openstack.org");
}

#[test]
fn destination_is_bare_host_without_username() {
    let settings = Settings::default();
    assert_eq!(settings.destination(), "review.openstack.org");
}
