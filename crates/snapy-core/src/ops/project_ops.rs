use chrono::Utc;

use super::store::{new_id, next_timestamp, Store};
use crate::config::ProjectDeletePolicy;
use crate::errors::{Result, SnapyError};
use crate::model::{NewProject, Project, ProjectPatch};

/// Create a new project
///
/// Unset or zero width/height take the configured canvas defaults
/// (1920×1080 unless overridden). `updated_at` starts equal to `created_at`.
///
/// The owner is not checked against the user collection.
pub fn create_project(store: &mut Store, new: NewProject) -> Project {
    let now = Utc::now();
    let canvas = &store.config.canvas;

    let project = Project {
        id: new_id(),
        user_id: new.user_id,
        title: new.title,
        description: new.description,
        canvas_data: new.canvas_data,
        thumbnail: new.thumbnail,
        width: dimension_or(new.width, canvas.default_width),
        height: dimension_or(new.height, canvas.default_height),
        is_public: new.is_public,
        source_template_id: None,
        created_at: now,
        updated_at: now,
    };

    tracing::debug!(project_id = %project.id, user_id = %project.user_id, "project created");
    store.projects.insert(project.id.clone(), project.clone());
    project
}

/// Requested canvas dimension, with zero treated as unset
pub(crate) fn dimension_or(requested: Option<u32>, default: u32) -> u32 {
    requested.filter(|d| *d > 0).unwrap_or(default)
}

/// Apply a patch to a project and refresh its `updated_at`
///
/// The timestamp is refreshed even for an empty patch, and always moves
/// strictly forward.
///
/// # Errors
/// * `ProjectNotFound` - If the project doesn't exist
pub fn update_project(store: &mut Store, id: &str, patch: ProjectPatch) -> Result<Project> {
    let project = store
        .projects
        .get_mut(id)
        .ok_or_else(|| SnapyError::ProjectNotFound {
            project_id: id.to_string(),
        })?;

    patch.apply_to(project);
    project.updated_at = next_timestamp(project.updated_at);
    Ok(project.clone())
}

/// Delete a project
///
/// Idempotent: deleting an absent id is a no-op. Under the `Cascade`
/// policy the project's assets and exports go with it; under `Orphan` they
/// stay until `sweep_orphans`.
pub fn delete_project(store: &mut Store, id: &str) {
    if store.projects.remove(id).is_none() {
        return;
    }

    if store.config.delete_policy == ProjectDeletePolicy::Cascade {
        let assets_before = store.assets.len();
        let exports_before = store.exports.len();
        store
            .assets
            .retain(|_, a| a.project_id.as_deref() != Some(id));
        store.exports.retain(|_, e| e.project_id != id);
        tracing::debug!(
            project_id = %id,
            assets_removed = assets_before - store.assets.len(),
            exports_removed = exports_before - store.exports.len(),
            "project deleted with cascade"
        );
    } else {
        tracing::debug!(project_id = %id, "project deleted, dependents kept");
    }
}

/// Counts returned by `sweep_orphans`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct SweepReport {
    pub assets_removed: usize,
    pub exports_removed: usize,
}

/// Remove assets and exports whose project no longer exists
///
/// Assets without a project are left alone.
pub fn sweep_orphans(store: &mut Store) -> SweepReport {
    let Store {
        projects,
        assets,
        exports,
        ..
    } = store;

    let assets_before = assets.len();
    let exports_before = exports.len();

    assets.retain(|_, a| {
        a.project_id
            .as_deref()
            .map_or(true, |pid| projects.contains_key(pid))
    });
    exports.retain(|_, e| projects.contains_key(&e.project_id));

    SweepReport {
        assets_removed: assets_before - assets.len(),
        exports_removed: exports_before - exports.len(),
    }
}
