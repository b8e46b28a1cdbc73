//! Integration tests for the siteconf binary.

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Spawn the binary with a clean siteconf environment: isolated config
/// home and none of the caller's `SITECONF*` overrides.
fn run(temp_dir: &TempDir, args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_siteconf");
    let config_home = temp_dir.path().join("config_home");
    let home = temp_dir.path().join("home");
    fs::create_dir_all(&config_home).unwrap();
    fs::create_dir_all(&home).unwrap();

    let mut command = Command::new(bin);
    for (key, _) in std::env::vars_os() {
        if key.to_string_lossy().starts_with("SITECONF") {
            command.env_remove(&key);
        }
    }
    command
        .env("XDG_CONFIG_HOME", config_home.as_os_str())
        .env("HOME", home.as_os_str())
        .arg("--root")
        .arg(temp_dir.path())
        .args(args)
        .output()
        .unwrap()
}

fn project(contents: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join("config");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), contents).unwrap();
    temp_dir
}

const DEPLOY: &str = r#"
package = "shop"

[global]
debug = "false"
email_to = "ops@example.com"

[app]
prefix = "/shop"
cache_dir = "/tmp/shop"

[templates]
search_paths = ["templates"]
"#;

#[test]
fn test_show_json() {
    let temp_dir = project(DEPLOY);
    let output = run(&temp_dir, &["show", "--format", "json"]);
    assert!(
        output.status.success(),
        "siteconf show should succeed: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["package"], "shop");
    assert_eq!(value["prefix"], "/shop");
    assert_eq!(value["errorware"]["error_email"], "ops@example.com");
    assert_eq!(value["template_options"]["myghty.raise_error"], true);
}

#[test]
fn test_prefix_and_get() {
    let temp_dir = project(DEPLOY);

    let output = run(&temp_dir, &["prefix", "--script-name", "/mounted"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "/shop");

    let output = run(&temp_dir, &["get", "cache_dir", "--strict"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "/tmp/shop");

    let output = run(&temp_dir, &["get", "missing", "--strict"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing"));
}

#[test]
fn test_class_name() {
    let temp_dir = project(DEPLOY);
    let output = run(&temp_dir, &["class-name", "with-dashes"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "WithDashes");
}

#[test]
fn test_invalid_configuration_exits_nonzero() {
    let temp_dir = project("[global]\ndebug = \"true\"\n");
    let output = run(&temp_dir, &["errorware"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Package"));
}

#[test]
fn test_parent_overrides_do_not_leak() {
    let temp_dir = project(DEPLOY);
    let output = super::test_utils::with_config_env(
        &temp_dir,
        &[("SITECONF__GLOBAL__DEBUG", "true")],
        || run(&temp_dir, &["errorware"]),
    );
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["debug"], false);
    assert_eq!(value["error_email"], "ops@example.com");
}
