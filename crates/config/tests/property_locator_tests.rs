//! Property-based tests for config file location order.
//!
//! Random layouts of search directories (some missing) and candidate files
//! are generated; the located path must always be the first hit in
//! extension-major, directory-minor order.

use std::path::PathBuf;

use proptest::prelude::*;
use seekconf::{ConfigError, ConfigManager};
use tempfile::TempDir;

const EXTENSIONS: [&str; 2] = ["yml", "yaml"];

/// One search directory: whether it exists, and which extensions it holds.
#[derive(Debug, Clone)]
struct DirLayout {
    exists: bool,
    files: [bool; 2],
}

fn dir_layout_strategy() -> impl Strategy<Value = DirLayout> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(exists, yml, yaml)| DirLayout {
        exists,
        files: [yml, yaml],
    })
}

fn expected_hit(root: &std::path::Path, layouts: &[DirLayout]) -> Option<PathBuf> {
    for (ext_index, ext) in EXTENSIONS.iter().enumerate() {
        for (dir_index, layout) in layouts.iter().enumerate() {
            if layout.exists && layout.files[ext_index] {
                return Some(root.join(format!("d{dir_index}")).join(format!("cfg.{ext}")));
            }
        }
    }
    None
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn locate_returns_first_hit_in_extension_major_order(
        layouts in prop::collection::vec(dir_layout_strategy(), 1..5),
        suffixed_name in any::<bool>(),
    ) {
        let root = TempDir::new().unwrap();
        let mut manager = ConfigManager::new()
            .with_config_name(if suffixed_name { "cfg.ini" } else { "cfg" })
            .with_config_format("yaml");

        for (index, layout) in layouts.iter().enumerate() {
            let dir = root.path().join(format!("d{index}"));
            if layout.exists {
                std::fs::create_dir(&dir).unwrap();
                for (ext, present) in EXTENSIONS.iter().zip(layout.files) {
                    if present {
                        std::fs::write(dir.join(format!("cfg.{ext}")), "k: v\n").unwrap();
                    }
                }
            }
            manager.add_search_path(dir);
        }

        let result = manager.locate();
        let any_dir = layouts.iter().any(|l| l.exists);

        match expected_hit(root.path(), &layouts) {
            Some(expected) => {
                prop_assert_eq!(result.unwrap(), expected);
            }
            None if any_dir => {
                let is_not_found = matches!(result, Err(ConfigError::FileNotFound { .. }));
                prop_assert!(is_not_found);
            }
            None => {
                let no_dirs = matches!(result, Err(ConfigError::NoValidDirectories { .. }));
                prop_assert!(no_dirs);
            }
        }
    }
}
