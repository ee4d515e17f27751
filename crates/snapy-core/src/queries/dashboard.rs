//! Per-user dashboard summary

use serde::Serialize;

use crate::model::{AssetType, Plan};
use crate::ops::Store;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_projects: usize,
    pub ai_generated: usize,
    /// Projects instantiated from a template
    pub templates_used: usize,
    pub exports: usize,
    pub ai_generations_used: u32,
    pub ai_generations_limit: u32,
}

/// Summarise a user's activity
///
/// An unknown user gets zero counts and the free-plan quota.
pub fn dashboard_stats(store: &Store, user_id: &str) -> DashboardStats {
    let projects = store.list_user_projects(user_id);
    let user = store.get_user(user_id);

    DashboardStats {
        total_projects: projects.len(),
        ai_generated: store
            .list_user_assets(user_id)
            .iter()
            .filter(|a| a.asset_type == AssetType::AiGenerated)
            .count(),
        templates_used: projects
            .iter()
            .filter(|p| p.source_template_id.is_some())
            .count(),
        exports: store.list_user_exports(user_id).len(),
        ai_generations_used: user.map_or(0, |u| u.ai_generations_used),
        ai_generations_limit: user.map_or_else(
            || store.config().plans.limit_for(Plan::Free),
            |u| u.ai_generations_limit,
        ),
    }
}
