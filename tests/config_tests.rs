use chrono::NaiveDate;
use lending_core::{
    config::{ConfigManager, LibraryConfig, SeedItem},
    domain::ItemVariant,
    LendingService, LibraryError,
};
use tempfile::TempDir;

#[test]
fn load_returns_defaults_when_file_missing() {
    let temp = TempDir::new().expect("temp dir");
    let manager = ConfigManager::with_base_dir(temp.path().to_path_buf());

    let config = manager.load().expect("load");
    assert_eq!(config, LibraryConfig::default());
    assert!(!manager.path().exists());
}

#[test]
fn save_then_load_preserves_settings() {
    let temp = TempDir::new().expect("temp dir");
    let manager = ConfigManager::with_base_dir(temp.path().join("nested"));

    let config = LibraryConfig {
        log_filter: "lending_core=debug".into(),
        seed_items: vec![SeedItem {
            kind: ItemVariant::Periodical,
            title: "Nature".into(),
            author: "Various".into(),
            issue_date: NaiveDate::from_ymd_opt(2025, 1, 15),
        }],
    };
    manager.save(&config).expect("save");

    assert!(manager.path().exists());
    assert!(!manager.path().with_extension("json.tmp").exists());
    assert_eq!(manager.load().expect("load"), config);
}

#[test]
fn corrupt_file_is_a_serde_error() {
    let temp = TempDir::new().expect("temp dir");
    let manager = ConfigManager::with_base_dir(temp.path().to_path_buf());
    std::fs::write(manager.path(), "{ not json").expect("write");

    let err = manager.load().unwrap_err();
    assert!(matches!(err, LibraryError::Serde(_)), "unexpected error: {err:?}");
}

#[test]
fn invalid_seed_aborts_startup() {
    let config = LibraryConfig {
        log_filter: LibraryConfig::default_log_filter(),
        seed_items: vec![SeedItem {
            kind: ItemVariant::Periodical,
            title: "Undated".into(),
            author: String::new(),
            issue_date: None,
        }],
    };

    let err = LendingService::from_config(&config).unwrap_err();
    assert!(matches!(err, LibraryError::MissingIssueDate));
}
