//! Thread-safe store handle with boundary logging.
//!
//! ## Logging Ownership
//!
//! This layer owns lifecycle logging for every store operation:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! `snapy-core` only uses `tracing::debug!()` for internal details.
//!
//! ## Locking
//!
//! One mutex guards all five collections. Every call holds it for the
//! whole operation, so callers never observe a partially applied write.
//! Reads return owned clones so the guard is never held by callers.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;

use snapy_core::ops::{
    asset_ops, export_ops, project_ops, quota_ops, template_ops, user_ops,
};
use snapy_core::{
    dashboard_stats, log_op_end, log_op_error, log_op_start, Asset, DashboardStats, Export,
    GenerationOutcome, GenerationRecord, NewAsset, NewExport, NewProject, NewTemplate, NewUser,
    Plan, Project, ProjectPatch, Result, SnapyError, Store, StoreConfig, SweepReport, Template,
    TemplateFilter, User, UserPatch,
};

/// Cloneable handle to one process-wide `Store`
///
/// Construct once at startup and hand clones to every consumer.
#[derive(Debug, Clone)]
pub struct SharedStore {
    inner: Arc<Mutex<Store>>,
}

impl Default for SharedStore {
    fn default() -> Self {
        Self::new(Store::new())
    }
}

impl SharedStore {
    pub fn new(store: Store) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Build a store from configuration, seeding the template catalog
    /// when enabled
    pub fn from_config(config: StoreConfig) -> Self {
        Self::new(Store::seeded(config))
    }

    fn lock(&self) -> Result<MutexGuard<'_, Store>> {
        self.inner.lock().map_err(|e| SnapyError::StoreUnavailable {
            reason: e.to_string(),
        })
    }

    /// Run `f` under the guard with start/end/error events around it
    fn run<T>(&self, op: &'static str, f: impl FnOnce(&mut Store) -> Result<T>) -> Result<T> {
        log_op_start!(op);
        let start = Instant::now();

        let result = self.lock().and_then(|mut store| f(&mut *store));

        match &result {
            Ok(_) => {
                log_op_end!(op, duration_ms = start.elapsed().as_millis() as u64);
            }
            Err(e) => {
                log_op_error!(
                    op,
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64
                );
            }
        }
        result
    }

    /// Run an infallible operation
    fn run_ok<T>(&self, op: &'static str, f: impl FnOnce(&mut Store) -> T) -> Result<T> {
        self.run(op, |store| Ok(f(store)))
    }

    // ===== Users =====

    /// # Errors
    /// `DuplicateUsername`/`DuplicateEmail` on uniqueness violations.
    pub fn create_user(&self, new: NewUser) -> Result<User> {
        self.run("create_user", |s| user_ops::create_user(s, new))
    }

    /// # Errors
    /// `StoreUnavailable` if the guard is poisoned.
    pub fn get_user(&self, id: &str) -> Result<Option<User>> {
        self.run_ok("get_user", |s| s.get_user(id).cloned())
    }

    /// # Errors
    /// `StoreUnavailable` if the guard is poisoned.
    pub fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.run_ok("get_user_by_username", |s| {
            s.get_user_by_username(username).cloned()
        })
    }

    /// # Errors
    /// `StoreUnavailable` if the guard is poisoned.
    pub fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.run_ok("get_user_by_email", |s| s.get_user_by_email(email).cloned())
    }

    /// # Errors
    /// `StoreUnavailable` if the guard is poisoned.
    pub fn list_users(&self) -> Result<Vec<User>> {
        self.run_ok("list_users", |s| s.list_users().into_iter().cloned().collect())
    }

    /// # Errors
    /// `UserNotFound` if the user doesn't exist.
    pub fn update_user(&self, id: &str, patch: UserPatch) -> Result<User> {
        self.run("update_user", |s| user_ops::update_user(s, id, patch))
    }

    /// # Errors
    /// `UserNotFound` if the user doesn't exist.
    pub fn update_user_billing(
        &self,
        id: &str,
        customer_id: String,
        subscription_id: Option<String>,
    ) -> Result<User> {
        self.run("update_user_billing", |s| {
            user_ops::update_user_billing(s, id, customer_id, subscription_id)
        })
    }

    /// # Errors
    /// `UserNotFound` if the user doesn't exist.
    pub fn update_user_ai_usage(&self, id: &str, used: u32) -> Result<User> {
        self.run("update_user_ai_usage", |s| {
            user_ops::update_user_ai_usage(s, id, used)
        })
    }

    /// # Errors
    /// `UserNotFound` if the user doesn't exist.
    pub fn update_user_plan(&self, id: &str, plan: Plan, limit: u32) -> Result<User> {
        self.run("update_user_plan", |s| {
            user_ops::update_user_plan(s, id, plan, limit)
        })
    }

    /// Apply a confirmed plan purchase
    ///
    /// # Errors
    /// `UserNotFound` if the user doesn't exist.
    pub fn change_plan(&self, id: &str, plan: Plan) -> Result<User> {
        self.run("change_plan", |s| user_ops::change_plan(s, id, plan))
    }

    // ===== Projects =====

    /// # Errors
    /// `StoreUnavailable` if the guard is poisoned.
    pub fn create_project(&self, new: NewProject) -> Result<Project> {
        self.run_ok("create_project", |s| project_ops::create_project(s, new))
    }

    /// # Errors
    /// `StoreUnavailable` if the guard is poisoned.
    pub fn get_project(&self, id: &str) -> Result<Option<Project>> {
        self.run_ok("get_project", |s| s.get_project(id).cloned())
    }

    /// # Errors
    /// `StoreUnavailable` if the guard is poisoned.
    pub fn list_user_projects(&self, user_id: &str) -> Result<Vec<Project>> {
        self.run_ok("list_user_projects", |s| {
            s.list_user_projects(user_id).into_iter().cloned().collect()
        })
    }

    /// # Errors
    /// `ProjectNotFound` if the project doesn't exist.
    pub fn update_project(&self, id: &str, patch: ProjectPatch) -> Result<Project> {
        self.run("update_project", |s| project_ops::update_project(s, id, patch))
    }

    /// # Errors
    /// `StoreUnavailable` if the guard is poisoned.
    pub fn delete_project(&self, id: &str) -> Result<()> {
        self.run_ok("delete_project", |s| project_ops::delete_project(s, id))
    }

    /// # Errors
    /// `StoreUnavailable` if the guard is poisoned.
    pub fn sweep_orphans(&self) -> Result<SweepReport> {
        self.run_ok("sweep_orphans", project_ops::sweep_orphans)
    }

    // ===== Templates =====

    /// # Errors
    /// `StoreUnavailable` if the guard is poisoned.
    pub fn create_template(&self, new: NewTemplate) -> Result<Template> {
        self.run_ok("create_template", |s| template_ops::create_template(s, new))
    }

    /// # Errors
    /// `StoreUnavailable` if the guard is poisoned.
    pub fn get_template(&self, id: &str) -> Result<Option<Template>> {
        self.run_ok("get_template", |s| s.get_template(id).cloned())
    }

    /// # Errors
    /// `StoreUnavailable` if the guard is poisoned.
    pub fn list_templates(&self, filter: &TemplateFilter) -> Result<Vec<Template>> {
        self.run_ok("list_templates", |s| {
            s.list_templates(filter).into_iter().cloned().collect()
        })
    }

    /// # Errors
    /// `TemplateNotFound` if the template doesn't exist.
    pub fn create_project_from_template(
        &self,
        template_id: &str,
        user_id: &str,
        title: Option<String>,
    ) -> Result<Project> {
        self.run("create_project_from_template", |s| {
            template_ops::create_project_from_template(s, template_id, user_id, title)
        })
    }

    // ===== Assets =====

    /// # Errors
    /// `ProjectNotFound` if the asset names a missing project.
    pub fn create_asset(&self, new: NewAsset) -> Result<Asset> {
        self.run("create_asset", |s| asset_ops::create_asset(s, new))
    }

    /// # Errors
    /// `StoreUnavailable` if the guard is poisoned.
    pub fn get_asset(&self, id: &str) -> Result<Option<Asset>> {
        self.run_ok("get_asset", |s| s.get_asset(id).cloned())
    }

    /// # Errors
    /// `StoreUnavailable` if the guard is poisoned.
    pub fn list_user_assets(&self, user_id: &str) -> Result<Vec<Asset>> {
        self.run_ok("list_user_assets", |s| {
            s.list_user_assets(user_id).into_iter().cloned().collect()
        })
    }

    /// # Errors
    /// `StoreUnavailable` if the guard is poisoned.
    pub fn list_project_assets(&self, project_id: &str) -> Result<Vec<Asset>> {
        self.run_ok("list_project_assets", |s| {
            s.list_project_assets(project_id).into_iter().cloned().collect()
        })
    }

    /// # Errors
    /// `StoreUnavailable` if the guard is poisoned.
    pub fn delete_asset(&self, id: &str) -> Result<()> {
        self.run_ok("delete_asset", |s| asset_ops::delete_asset(s, id))
    }

    // ===== Exports =====

    /// # Errors
    /// `ProjectNotFound` if the export's project doesn't exist.
    pub fn create_export(&self, new: NewExport) -> Result<Export> {
        self.run("create_export", |s| export_ops::create_export(s, new))
    }

    /// # Errors
    /// `StoreUnavailable` if the guard is poisoned.
    pub fn get_export(&self, id: &str) -> Result<Option<Export>> {
        self.run_ok("get_export", |s| s.get_export(id).cloned())
    }

    /// # Errors
    /// `StoreUnavailable` if the guard is poisoned.
    pub fn list_project_exports(&self, project_id: &str) -> Result<Vec<Export>> {
        self.run_ok("list_project_exports", |s| {
            s.list_project_exports(project_id)
                .into_iter()
                .cloned()
                .collect()
        })
    }

    /// # Errors
    /// `StoreUnavailable` if the guard is poisoned.
    pub fn list_user_exports(&self, user_id: &str) -> Result<Vec<Export>> {
        self.run_ok("list_user_exports", |s| {
            s.list_user_exports(user_id).into_iter().cloned().collect()
        })
    }

    // ===== Quota & stats =====

    /// # Errors
    /// `UserNotFound` or `QuotaExhausted`.
    pub fn check_generation_quota(&self, user_id: &str) -> Result<u32> {
        self.run("check_generation_quota", |s| {
            quota_ops::check_generation_quota(s, user_id)
        })
    }

    /// # Errors
    /// `UserNotFound`, `QuotaExhausted` or `ProjectNotFound`.
    pub fn record_ai_generation(
        &self,
        user_id: &str,
        record: GenerationRecord,
    ) -> Result<GenerationOutcome> {
        self.run("record_ai_generation", |s| {
            quota_ops::record_ai_generation(s, user_id, record)
        })
    }

    /// # Errors
    /// `StoreUnavailable` if the guard is poisoned.
    pub fn dashboard_stats(&self, user_id: &str) -> Result<DashboardStats> {
        self.run_ok("dashboard_stats", |s| dashboard_stats(s, user_id))
    }
}
