//! Integration tests for layered configuration loading

use siteconf::config::{config_home, ConfigLoader};
use tempfile::TempDir;

use crate::integration::test_utils::{with_config_env, write_project_config, write_user_config};

#[test]
fn test_config_home_prefers_xdg() {
    let test_dir = TempDir::new().unwrap();
    with_config_env(&test_dir, &[], || {
        assert_eq!(config_home().unwrap(), test_dir.path().join("config_home"));
        assert_eq!(
            ConfigLoader::user_config_path().unwrap(),
            test_dir
                .path()
                .join("config_home")
                .join("siteconf")
                .join("config.toml")
        );
    });
}

#[test]
fn test_load_without_any_files_uses_defaults() {
    let test_dir = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    with_config_env(&test_dir, &[], || {
        let config = ConfigLoader::load(project.path()).unwrap();
        assert_eq!(config.package, "");
        assert!(config.global.is_empty());
        assert!(config.app.is_empty());
        assert_eq!(config.templates.engine, "myghty");
        assert!(config.templates.search_paths.is_empty());
    });
}

#[test]
fn test_project_config_overrides_user_config() {
    let test_dir = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();

    write_user_config(
        &test_dir,
        r#"
[global]
debug = "true"
smtp_server = "mail.internal"
"#,
    );
    write_project_config(
        project.path(),
        "config",
        r#"
package = "shop"

[global]
debug = "false"

[app]
prefix = "/shop"
"#,
    );

    with_config_env(&test_dir, &[], || {
        let config = ConfigLoader::load(project.path()).unwrap();
        assert_eq!(config.package, "shop");
        assert_eq!(config.global.get("debug"), Some("false"));
        // Keys only set by the user file survive the project layer.
        assert_eq!(config.global.get("smtp_server"), Some("mail.internal"));
        assert_eq!(config.app.get("prefix"), Some("/shop"));
    });
}

#[test]
fn test_environment_file_selected_by_env_var() {
    let test_dir = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();

    write_project_config(
        project.path(),
        "config",
        "package = \"shop\"\n[app]\nprefix = \"/dev\"\n",
    );
    write_project_config(project.path(), "production", "[app]\nprefix = \"/live\"\n");

    with_config_env(&test_dir, &[], || {
        let config = ConfigLoader::load(project.path()).unwrap();
        assert_eq!(config.app.get("prefix"), Some("/dev"));
    });

    with_config_env(&test_dir, &[("SITECONF_ENV", "production")], || {
        let config = ConfigLoader::load(project.path()).unwrap();
        assert_eq!(config.app.get("prefix"), Some("/live"));
        assert_eq!(config.package, "shop");
    });
}

#[test]
fn test_environment_variables_override_files() {
    let test_dir = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();

    write_project_config(
        project.path(),
        "config",
        "package = \"shop\"\n[global]\ndebug = \"true\"\n",
    );

    with_config_env(&test_dir, &[("SITECONF__GLOBAL__DEBUG", "false")], || {
        let config = ConfigLoader::load(project.path()).unwrap();
        assert_eq!(config.global.get("debug"), Some("false"));
    });
}

#[test]
fn test_load_from_missing_file_fails() {
    let project = TempDir::new().unwrap();
    let result = ConfigLoader::load_from_file(&project.path().join("absent.toml"));
    assert!(result.is_err());
}
