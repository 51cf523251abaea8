//! Environment override tests for `ConfigManager`.
//!
//! Responsibilities:
//! - Test `SEEKCONF_CONFIG_PATH`, `SEEKCONF_CONFIG_NAME`, `SEEKCONF_CONFIG_FORMAT`.
//! - Test empty/whitespace handling and trimming.

use serial_test::serial;
use tempfile::TempDir;

use super::{env_lock, write_config};
use crate::constants::{ENV_CONFIG_FORMAT, ENV_CONFIG_NAME, ENV_CONFIG_PATH};
use crate::manager::{ConfigManager, env_var_or_none};

#[test]
#[serial]
fn test_env_overrides_name_and_format() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            (ENV_CONFIG_NAME, Some("from-env")),
            (ENV_CONFIG_FORMAT, Some(" yaml ")),
            (ENV_CONFIG_PATH, None),
        ],
        || {
            let manager = ConfigManager::from_env();
            assert_eq!(manager.config_name(), "from-env");
            assert_eq!(manager.config_format(), "yaml");
            assert!(manager.search_paths().is_empty());
        },
    );
}

#[test]
#[serial]
fn test_env_path_list_is_appended_in_order() {
    let _lock = env_lock().lock().unwrap();
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    let list = std::env::join_paths([first.path(), second.path()]).unwrap();

    temp_env::with_vars(
        [
            (ENV_CONFIG_PATH, Some(list.to_str().unwrap())),
            (ENV_CONFIG_NAME, None),
            (ENV_CONFIG_FORMAT, None),
        ],
        || {
            let mut manager = ConfigManager::new().with_search_path("/configured/first");
            manager.apply_env();

            assert_eq!(
                manager.search_paths(),
                &[
                    std::path::PathBuf::from("/configured/first"),
                    first.path().to_path_buf(),
                    second.path().to_path_buf(),
                ]
            );
        },
    );
}

#[test]
#[serial]
fn test_blank_env_values_are_ignored() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            (ENV_CONFIG_PATH, Some("   ")),
            (ENV_CONFIG_NAME, Some("")),
            (ENV_CONFIG_FORMAT, Some("\t")),
        ],
        || {
            let manager = ConfigManager::from_env();
            assert_eq!(manager.config_name(), crate::constants::DEFAULT_CONFIG_NAME);
            assert_eq!(manager.config_format(), crate::constants::DEFAULT_CONFIG_FORMAT);
            assert!(manager.search_paths().is_empty());
        },
    );
}

#[test]
#[serial]
fn test_env_configured_manager_loads() {
    let _lock = env_lock().lock().unwrap();
    let dir = TempDir::new().unwrap();
    write_config(dir.path(), "svc.ini", "[db]\nhost=envhost\n");

    temp_env::with_vars(
        [
            (ENV_CONFIG_PATH, Some(dir.path().to_str().unwrap())),
            (ENV_CONFIG_NAME, Some("svc")),
            (ENV_CONFIG_FORMAT, Some("ini")),
        ],
        || {
            let mut manager = ConfigManager::from_env();
            manager.load().unwrap();
            assert_eq!(manager.get("db.host"), "envhost");
        },
    );
}

#[test]
#[serial]
fn test_env_var_or_none_trims() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_var("SEEKCONF_TEST_TRIM", Some("  value  "), || {
        assert_eq!(env_var_or_none("SEEKCONF_TEST_TRIM"), Some("value".to_string()));
    });
    temp_env::with_var("SEEKCONF_TEST_TRIM", None::<&str>, || {
        assert_eq!(env_var_or_none("SEEKCONF_TEST_TRIM"), None);
    });
}
