use mindcare_cli::config::{
    CURRENT_VERSION, LogFormat, MindcareConfig, OutputFormat, load_config, migrate, save_config,
};

fn write(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.json");
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = load_config(&dir.path().join("absent.json")).unwrap();
    assert_eq!(loaded.config.config_version, CURRENT_VERSION);
    assert_eq!(loaded.config.log_format, LogFormat::Pretty);
    assert_eq!(loaded.config.output, OutputFormat::Text);
    assert!(loaded.migrated_from.is_none());
}

#[test]
fn unversioned_config_is_migrated_to_v1() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, r#"{ "log_format": "json", "clinician": "Dr. Rivera" }"#);

    let loaded = load_config(&path).unwrap();
    assert_eq!(loaded.migrated_from, Some(0));
    assert_eq!(loaded.config.config_version, 1);
    assert_eq!(loaded.config.log_format, LogFormat::Json);
    assert_eq!(loaded.config.output, OutputFormat::Text);
    assert_eq!(loaded.config.clinician.as_deref(), Some("Dr. Rivera"));
}

#[test]
fn migrate_keeps_an_existing_output_field() {
    let json = serde_json::json!({ "output": "json", "created_at": "2026-01-01T00:00:00Z" });
    let migrated = migrate(json, 0).unwrap();
    assert_eq!(migrated["output"], "json");
    assert_eq!(migrated["config_version"], 1);
    assert_eq!(migrated["created_at"], "2026-01-01T00:00:00Z");
}

#[test]
fn current_version_is_not_reported_as_migrated() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        &dir,
        r#"{ "config_version": 1, "output": "json", "created_at": "2026-01-01T00:00:00Z" }"#,
    );
    let loaded = load_config(&path).unwrap();
    assert!(loaded.migrated_from.is_none());
    assert_eq!(loaded.config.output, OutputFormat::Json);
}

#[test]
fn newer_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, r#"{ "config_version": 2, "created_at": "2026-01-01T00:00:00Z" }"#);
    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn version_beyond_u32_is_rejected_not_migrated() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, r#"{ "config_version": 4294967296 }"#);
    assert!(load_config(&path).is_err());

    let path = write(&dir, r#"{ "config_version": "one" }"#);
    assert!(load_config(&path).is_err());
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");
    let config = MindcareConfig {
        log_format: LogFormat::Json,
        output: OutputFormat::Json,
        clinician: Some("Dr. Okafor".to_string()),
        ..MindcareConfig::default()
    };

    save_config(&path, &config).unwrap();
    assert!(!path.with_extension("json.tmp").exists());

    let loaded = load_config(&path).unwrap();
    assert!(loaded.migrated_from.is_none());
    assert_eq!(loaded.config.log_format, LogFormat::Json);
    assert_eq!(loaded.config.output, OutputFormat::Json);
    assert_eq!(loaded.config.clinician.as_deref(), Some("Dr. Okafor"));
    assert_eq!(loaded.config.created_at, config.created_at);
}

#[cfg(unix)]
#[test]
fn saved_config_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    save_config(&path, &MindcareConfig::default()).unwrap();
    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}
