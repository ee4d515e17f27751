#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;

use snapy_core::ops::{asset_ops, project_ops};
use snapy_core::{
    AssetType, NewAsset, NewProject, ProjectDeletePolicy, SnapyError, Store, StoreConfig,
};
use tempfile::TempDir;

#[test]
fn test_load_from_explicit_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("snapy.toml");
    fs::write(
        &path,
        r#"
        seed_sample_templates = false
        delete_policy = "orphan"

        [canvas]
        default_width = 800
        default_height = 600
        "#,
    )
    .unwrap();

    let config = StoreConfig::load(Some(&path)).unwrap();
    assert!(!config.seed_sample_templates);
    assert_eq!(config.delete_policy, ProjectDeletePolicy::Orphan);
    assert_eq!(config.canvas.default_width, 800);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.toml");

    let result = StoreConfig::load(Some(&path));
    assert!(matches!(result, Err(SnapyError::Io { .. })));
}

#[test]
fn test_loaded_config_drives_store_behaviour() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("snapy.toml");
    fs::write(
        &path,
        "delete_policy = \"orphan\"\n[canvas]\ndefault_width = 640\ndefault_height = 480\n",
    )
    .unwrap();

    let mut store = Store::seeded(StoreConfig::load(Some(&path)).unwrap());
    let project = project_ops::create_project(&mut store, NewProject::new("u-1", "Sketch"));
    assert_eq!((project.width, project.height), (640, 480));

    asset_ops::create_asset(
        &mut store,
        NewAsset::new("u-1", "a.png", "https://cdn/a.png", AssetType::Image, 10)
            .in_project(&project.id),
    )
    .unwrap();
    project_ops::delete_project(&mut store, &project.id);
    assert_eq!(store.list_project_assets(&project.id).len(), 1);
}
