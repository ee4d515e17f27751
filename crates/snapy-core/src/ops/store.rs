use chrono::{DateTime, Duration, Utc};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::config::StoreConfig;
use crate::model::{Asset, Export, Project, Template, TemplateFilter, User};

/// In-memory store for the five Snapy collections
///
/// Keys are UUID v7 strings, which sort by creation time, so every scan
/// returns records in creation order.
///
/// Not thread-safe on its own: all operations take `&self`/`&mut self` and
/// finish without yielding. Wrap it in `snapy_engine::SharedStore` to share
/// it across threads.
#[derive(Debug, Clone, Default)]
pub struct Store {
    pub(crate) config: StoreConfig,
    pub(crate) users: BTreeMap<String, User>,
    pub(crate) projects: BTreeMap<String, Project>,
    pub(crate) templates: BTreeMap<String, Template>,
    pub(crate) assets: BTreeMap<String, Asset>,
    pub(crate) exports: BTreeMap<String, Export>,
}

impl Store {
    /// Create an empty store with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with the given configuration
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Create a store and, when configured, load the built-in templates
    pub fn seeded(config: StoreConfig) -> Self {
        let mut store = Self::with_config(config);
        if store.config.seed_sample_templates {
            super::template_ops::seed_sample_templates(&mut store);
        }
        store
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // ===== Users =====

    pub fn get_user(&self, id: &str) -> Option<&User> {
        self.users.get(id)
    }

    pub fn get_user_by_username(&self, username: &str) -> Option<&User> {
        self.users.values().find(|u| u.username == username)
    }

    pub fn get_user_by_email(&self, email: &str) -> Option<&User> {
        self.users.values().find(|u| u.email == email)
    }

    pub fn list_users(&self) -> Vec<&User> {
        self.users.values().collect()
    }

    // ===== Projects =====

    pub fn get_project(&self, id: &str) -> Option<&Project> {
        self.projects.get(id)
    }

    pub fn list_user_projects(&self, user_id: &str) -> Vec<&Project> {
        self.projects
            .values()
            .filter(|p| p.user_id == user_id)
            .collect()
    }

    pub fn project_exists(&self, id: &str) -> bool {
        self.projects.contains_key(id)
    }

    // ===== Templates =====

    pub fn get_template(&self, id: &str) -> Option<&Template> {
        self.templates.get(id)
    }

    pub fn list_templates(&self, filter: &TemplateFilter) -> Vec<&Template> {
        self.templates
            .values()
            .filter(|t| filter.matches(t))
            .collect()
    }

    // ===== Assets =====

    pub fn get_asset(&self, id: &str) -> Option<&Asset> {
        self.assets.get(id)
    }

    pub fn list_user_assets(&self, user_id: &str) -> Vec<&Asset> {
        self.assets
            .values()
            .filter(|a| a.user_id == user_id)
            .collect()
    }

    pub fn list_project_assets(&self, project_id: &str) -> Vec<&Asset> {
        self.assets
            .values()
            .filter(|a| a.project_id.as_deref() == Some(project_id))
            .collect()
    }

    // ===== Exports =====

    pub fn get_export(&self, id: &str) -> Option<&Export> {
        self.exports.get(id)
    }

    pub fn list_project_exports(&self, project_id: &str) -> Vec<&Export> {
        self.exports
            .values()
            .filter(|e| e.project_id == project_id)
            .collect()
    }

    pub fn list_user_exports(&self, user_id: &str) -> Vec<&Export> {
        self.exports
            .values()
            .filter(|e| e.user_id == user_id)
            .collect()
    }
}

/// Fresh time-ordered identifier
pub(crate) fn new_id() -> String {
    Uuid::now_v7().to_string()
}

/// Timestamp for a mutation of a record last touched at `previous`
///
/// Always strictly later than `previous`, even when the clock has not
/// advanced (or went backwards).
pub(crate) fn next_timestamp(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}
