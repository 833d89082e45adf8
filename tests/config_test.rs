use agent_manager::cli::Cli;
use agent_manager::config::{Settings, DEFAULT_MAX_PAYLOAD_BYTES};
use clap::Parser;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_config_file_uses_defaults() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();

    let settings = Settings::from_root(root.to_str().unwrap())?;

    assert_eq!(settings.decoder.max_payload_bytes, DEFAULT_MAX_PAYLOAD_BYTES);
    assert!(settings.decoder.validate);
    assert_eq!(settings.logging.level, "info");

    Ok(())
}

#[test]
fn test_load_toml_config() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();

    let config_toml = r#"
[decoder]
max_payload_bytes = 2048
deny_unknown_fields = true

[logging]
level = "debug"
"#;
    fs::write(root.join("agent-manager.toml"), config_toml)?;

    let settings = Settings::from_root(root.to_str().unwrap())?;

    assert_eq!(settings.decoder.max_payload_bytes, 2048);
    assert!(settings.decoder.deny_unknown_fields);
    // Unset keys keep their defaults
    assert!(settings.decoder.validate);
    assert!(settings.decoder.pretty);
    assert_eq!(settings.logging.max_level(), Some(tracing::Level::DEBUG));

    Ok(())
}

#[test]
fn test_load_yaml_config() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();

    let config_yaml = r#"
decoder:
  validate: false
  pretty: false
"#;
    fs::write(root.join("agent-manager.yaml"), config_yaml)?;

    let settings = Settings::from_root(root.to_str().unwrap())?;

    assert!(!settings.decoder.validate);
    assert!(!settings.decoder.pretty);

    Ok(())
}

#[test]
fn test_invalid_config_is_rejected() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();

    fs::write(
        root.join("agent-manager.toml"),
        "[logging]\nlevel = \"shouting\"\n",
    )?;

    let err = Settings::from_root(root.to_str().unwrap()).unwrap_err();
    assert!(err.to_string().contains("logging.level"));

    Ok(())
}

#[test]
fn test_cli_overrides_config_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("custom.toml");

    fs::write(
        &config_path,
        "[decoder]\nmax_payload_bytes = 2048\nvalidate = true\n",
    )?;

    let cli = Cli::parse_from([
        "agent-manager",
        "--config",
        config_path.to_str().unwrap(),
        "--max-payload-bytes",
        "64",
        "--validate",
        "false",
        "schema",
    ]);

    let settings = Settings::new_with_cli(&cli)?;

    assert_eq!(settings.decoder.max_payload_bytes, 64);
    assert!(!settings.decoder.validate);

    Ok(())
}
