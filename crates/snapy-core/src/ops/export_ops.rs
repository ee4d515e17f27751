use chrono::Utc;

use super::store::{new_id, Store};
use crate::errors::{Result, SnapyError};
use crate::model::{Export, NewExport};

/// Record a finished export
///
/// Quality defaults to `high`.
///
/// # Errors
/// * `ProjectNotFound` - If the export's project doesn't exist
pub fn create_export(store: &mut Store, new: NewExport) -> Result<Export> {
    if !store.project_exists(&new.project_id) {
        return Err(SnapyError::ProjectNotFound {
            project_id: new.project_id,
        });
    }

    let export = Export {
        id: new_id(),
        project_id: new.project_id,
        user_id: new.user_id,
        format: new.format,
        quality: new.quality.unwrap_or_default(),
        url: new.url,
        size: new.size,
        created_at: Utc::now(),
    };

    store.exports.insert(export.id.clone(), export.clone());
    Ok(export)
}
