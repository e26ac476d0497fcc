//! Configuration file loading and scope resolution.

use azdo::config::DevOpsConfig;
use azdo::error::CliError;
use tempfile::TempDir;

#[test]
fn config_file_supplies_organization_project_and_logging() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("config.toml");
    std::fs::write(
        &config_file,
        r#"
organization = "https://dev.azure.com/contoso/"
project = "Fabrikam"

[logging]
level = "warn"
format = "json"
"#,
    )
    .unwrap();

    let config = DevOpsConfig::load_from_file(&config_file).unwrap();
    assert_eq!(
        config.current_instance_uri().unwrap(),
        "https://dev.azure.com/contoso/"
    );
    let (org, project) = config.resolve_instance_and_project(None, None, true).unwrap();
    assert_eq!(org, "https://dev.azure.com/contoso/");
    assert_eq!(project, "Fabrikam");
    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.logging.format, "json");
    assert!(config.logging.color);
}

#[test]
fn partial_config_file_leaves_the_rest_default() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("config.toml");
    std::fs::write(&config_file, "project = \"Fabrikam\"\n").unwrap();

    let config = DevOpsConfig::load_from_file(&config_file).unwrap();
    assert!(config.organization.is_none());
    assert_eq!(config.logging.level, "info");
    assert!(matches!(
        config.current_instance_uri(),
        Err(CliError::Config(_))
    ));
}

#[test]
fn unreadable_config_file_is_a_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.toml");
    assert!(matches!(
        DevOpsConfig::load_from_file(&missing),
        Err(CliError::Config(_))
    ));
}
