use chrono::Utc;

use super::store::{new_id, Store};
use crate::errors::{Result, SnapyError};
use crate::model::{Asset, NewAsset};

/// Record an uploaded or generated asset
///
/// # Errors
/// * `ProjectNotFound` - If `project_id` is set but names no project
pub fn create_asset(store: &mut Store, new: NewAsset) -> Result<Asset> {
    if let Some(project_id) = new.project_id.as_deref() {
        if !store.project_exists(project_id) {
            return Err(SnapyError::ProjectNotFound {
                project_id: project_id.to_string(),
            });
        }
    }

    let asset = Asset {
        id: new_id(),
        user_id: new.user_id,
        project_id: new.project_id,
        filename: new.filename,
        url: new.url,
        asset_type: new.asset_type,
        size: new.size,
        ai_prompt: new.ai_prompt,
        created_at: Utc::now(),
    };

    store.assets.insert(asset.id.clone(), asset.clone());
    Ok(asset)
}

/// Delete an asset; absent ids are a no-op
pub fn delete_asset(store: &mut Store, id: &str) {
    if store.assets.remove(id).is_some() {
        tracing::debug!(asset_id = %id, "asset deleted");
    }
}
