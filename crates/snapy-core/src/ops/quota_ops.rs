//! AI generation quota accounting
//!
//! The image service is called by the host; these operations only gate the
//! call and record its result.

use chrono::Utc;
use serde::Serialize;

use super::asset_ops;
use super::store::Store;
use crate::errors::{Result, SnapyError};
use crate::model::{Asset, AssetType, NewAsset, User};

/// Result of a generation the host obtained from the image service
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRecord {
    pub prompt: String,
    pub image_url: String,
    pub project_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOutcome {
    pub asset: Asset,
    pub remaining_generations: u32,
}

fn user_with_quota<'a>(store: &'a Store, user_id: &str) -> Result<&'a User> {
    let user = store
        .get_user(user_id)
        .ok_or_else(|| SnapyError::UserNotFound {
            user_id: user_id.to_string(),
        })?;

    if !user.has_generations_left() {
        return Err(SnapyError::QuotaExhausted {
            user_id: user_id.to_string(),
            used: user.ai_generations_used,
            limit: user.ai_generations_limit,
        });
    }
    Ok(user)
}

/// Generations the user may still request
///
/// # Errors
/// * `UserNotFound` - If the user doesn't exist
/// * `QuotaExhausted` - If usage has reached the plan limit
pub fn check_generation_quota(store: &Store, user_id: &str) -> Result<u32> {
    user_with_quota(store, user_id).map(User::remaining_generations)
}

/// Count one generation against the user's quota and store its image
///
/// The asset is typed `ai-generated`, named `ai-generated-<millis>.png`,
/// has size 0 and keeps the prompt. Nothing is modified on error.
///
/// # Errors
/// * `UserNotFound` - If the user doesn't exist
/// * `QuotaExhausted` - If usage has reached the plan limit
/// * `ProjectNotFound` - If `project_id` names no project
pub fn record_ai_generation(
    store: &mut Store,
    user_id: &str,
    record: GenerationRecord,
) -> Result<GenerationOutcome> {
    let used = user_with_quota(store, user_id)?.ai_generations_used;

    let new = NewAsset {
        user_id: user_id.to_string(),
        project_id: record.project_id,
        filename: format!("ai-generated-{}.png", Utc::now().timestamp_millis()),
        url: record.image_url,
        asset_type: AssetType::AiGenerated,
        size: 0,
        ai_prompt: Some(record.prompt),
    };
    let asset = asset_ops::create_asset(store, new)?;

    let user = super::user_ops::update_user_ai_usage(store, user_id, used + 1)?;
    tracing::debug!(
        user_id = %user_id,
        asset_id = %asset.id,
        remaining = user.remaining_generations(),
        "ai generation recorded"
    );

    Ok(GenerationOutcome {
        asset,
        remaining_generations: user.remaining_generations(),
    })
}
