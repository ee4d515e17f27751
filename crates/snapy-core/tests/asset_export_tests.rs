mod common;

use common::{create_test_project, new_store, store_with};
use snapy_core::ops::{asset_ops, export_ops, project_ops};
use snapy_core::{
    AssetType, ExportFormat, ExportQuality, NewAsset, NewExport, ProjectDeletePolicy, SnapyError,
    StoreConfig, SweepReport,
};

fn new_export(project_id: &str, user_id: &str, quality: Option<ExportQuality>) -> NewExport {
    NewExport {
        project_id: project_id.to_string(),
        user_id: user_id.to_string(),
        format: ExportFormat::Png,
        quality,
        url: "https://exports.example.com/out.png".to_string(),
        size: 1024 * 1024,
    }
}

// ===== ASSET TESTS =====

#[test]
fn test_create_asset_without_project() {
    let mut store = new_store();
    let asset = asset_ops::create_asset(
        &mut store,
        NewAsset::new("u-1", "logo.png", "https://cdn/logo.png", AssetType::Icon, 512),
    )
    .unwrap();

    assert!(asset.project_id.is_none());
    assert!(asset.ai_prompt.is_none());
    assert_eq!(store.get_asset(&asset.id), Some(&asset));
}

#[test]
fn test_create_asset_with_missing_project_fails() {
    let mut store = new_store();
    let result = asset_ops::create_asset(
        &mut store,
        NewAsset::new("u-1", "bg.png", "https://cdn/bg.png", AssetType::Background, 1)
            .in_project("ghost"),
    );

    assert!(matches!(result, Err(SnapyError::ProjectNotFound { .. })));
    assert!(store.list_user_assets("u-1").is_empty());
}

#[test]
fn test_asset_filters_by_user_and_project() {
    let mut store = new_store();
    let project = create_test_project(&mut store, "u-1", "Flyer");

    let in_project = asset_ops::create_asset(
        &mut store,
        NewAsset::new("u-1", "a.png", "https://cdn/a.png", AssetType::Image, 10)
            .in_project(&project.id),
    )
    .unwrap();
    asset_ops::create_asset(
        &mut store,
        NewAsset::new("u-1", "b.png", "https://cdn/b.png", AssetType::Image, 10),
    )
    .unwrap();
    asset_ops::create_asset(
        &mut store,
        NewAsset::new("u-2", "c.png", "https://cdn/c.png", AssetType::Image, 10),
    )
    .unwrap();

    assert_eq!(store.list_user_assets("u-1").len(), 2);
    assert_eq!(store.list_user_assets("u-2").len(), 1);

    let project_assets = store.list_project_assets(&project.id);
    assert_eq!(project_assets.len(), 1);
    assert_eq!(project_assets[0].id, in_project.id);
}

#[test]
fn test_delete_asset_is_idempotent() {
    let mut store = new_store();
    let asset = asset_ops::create_asset(
        &mut store,
        NewAsset::new("u-1", "x.png", "https://cdn/x.png", AssetType::Image, 1),
    )
    .unwrap();

    asset_ops::delete_asset(&mut store, &asset.id);
    asset_ops::delete_asset(&mut store, &asset.id);
    assert!(store.get_asset(&asset.id).is_none());
}

// ===== EXPORT TESTS =====

#[test]
fn test_create_export_defaults_quality_high() {
    let mut store = new_store();
    let project = create_test_project(&mut store, "u-1", "Deck");

    let export = export_ops::create_export(&mut store, new_export(&project.id, "u-1", None))
        .unwrap();
    assert_eq!(export.quality, ExportQuality::High);

    let low = export_ops::create_export(
        &mut store,
        new_export(&project.id, "u-1", Some(ExportQuality::Low)),
    )
    .unwrap();
    assert_eq!(low.quality, ExportQuality::Low);

    assert_eq!(store.list_project_exports(&project.id).len(), 2);
    assert_eq!(store.list_user_exports("u-1").len(), 2);
    assert_eq!(store.get_export(&export.id), Some(&export));
}

#[test]
fn test_create_export_for_missing_project_fails() {
    let mut store = new_store();
    let result = export_ops::create_export(&mut store, new_export("ghost", "u-1", None));
    assert!(matches!(result, Err(SnapyError::ProjectNotFound { project_id }) if project_id == "ghost"));
}

// ===== DELETE POLICY TESTS =====

#[test]
fn test_cascade_delete_removes_dependents() {
    let mut store = new_store();
    let doomed = create_test_project(&mut store, "u-1", "Doomed");
    let kept = create_test_project(&mut store, "u-1", "Kept");

    for project_id in [&doomed.id, &kept.id] {
        asset_ops::create_asset(
            &mut store,
            NewAsset::new("u-1", "a.png", "https://cdn/a.png", AssetType::Image, 1)
                .in_project(project_id.as_str()),
        )
        .unwrap();
        export_ops::create_export(&mut store, new_export(project_id, "u-1", None)).unwrap();
    }
    let loose = asset_ops::create_asset(
        &mut store,
        NewAsset::new("u-1", "loose.png", "https://cdn/l.png", AssetType::Image, 1),
    )
    .unwrap();

    project_ops::delete_project(&mut store, &doomed.id);

    assert!(store.list_project_assets(&doomed.id).is_empty());
    assert!(store.list_project_exports(&doomed.id).is_empty());
    assert_eq!(store.list_project_assets(&kept.id).len(), 1);
    assert_eq!(store.list_project_exports(&kept.id).len(), 1);
    assert!(store.get_asset(&loose.id).is_some());
}

#[test]
fn test_orphan_policy_keeps_dependents_until_sweep() {
    let mut store = store_with(StoreConfig {
        delete_policy: ProjectDeletePolicy::Orphan,
        ..StoreConfig::default()
    });
    let project = create_test_project(&mut store, "u-1", "Gone");
    asset_ops::create_asset(
        &mut store,
        NewAsset::new("u-1", "a.png", "https://cdn/a.png", AssetType::Image, 1)
            .in_project(&project.id),
    )
    .unwrap();
    export_ops::create_export(&mut store, new_export(&project.id, "u-1", None)).unwrap();
    let loose = asset_ops::create_asset(
        &mut store,
        NewAsset::new("u-1", "loose.png", "https://cdn/l.png", AssetType::Image, 1),
    )
    .unwrap();

    project_ops::delete_project(&mut store, &project.id);
    assert_eq!(store.list_project_assets(&project.id).len(), 1);
    assert_eq!(store.list_project_exports(&project.id).len(), 1);

    let report = project_ops::sweep_orphans(&mut store);
    assert_eq!(report.assets_removed, 1);
    assert_eq!(report.exports_removed, 1);
    assert!(store.list_project_assets(&project.id).is_empty());
    assert!(store.get_asset(&loose.id).is_some());

    assert_eq!(project_ops::sweep_orphans(&mut store), SweepReport::default());
}
