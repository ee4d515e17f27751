//! Store configuration
//!
//! Loaded from TOML. Every field has a default so an empty file (or no
//! file at all) yields the stock behaviour.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::{Result, SnapyError};
use crate::model::Plan;

/// Environment variable naming a config file when no path is given
pub const CONFIG_ENV_VAR: &str = "SNAPY_CONFIG";

/// What happens to a project's assets and exports when it is deleted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectDeletePolicy {
    /// Remove the project's assets and exports with it
    #[default]
    Cascade,
    /// Keep them; `Store::sweep_orphans` removes them later
    Orphan,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasDefaults {
    pub default_width: u32,
    pub default_height: u32,
}

impl Default for CanvasDefaults {
    fn default() -> Self {
        Self {
            default_width: 1920,
            default_height: 1080,
        }
    }
}

/// AI generation quota per plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanQuotas {
    pub free: u32,
    pub pro: u32,
    pub enterprise: u32,
}

impl Default for PlanQuotas {
    fn default() -> Self {
        Self {
            free: 10,
            pro: 100,
            enterprise: 1000,
        }
    }
}

impl PlanQuotas {
    pub fn limit_for(&self, plan: Plan) -> u32 {
        match plan {
            Plan::Free => self.free,
            Plan::Pro => self.pro,
            Plan::Enterprise => self.enterprise,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Populate the built-in templates in `Store::seeded`
    pub seed_sample_templates: bool,
    pub delete_policy: ProjectDeletePolicy,
    pub canvas: CanvasDefaults,
    pub plans: PlanQuotas,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed_sample_templates: true,
            delete_policy: ProjectDeletePolicy::default(),
            canvas: CanvasDefaults::default(),
            plans: PlanQuotas::default(),
        }
    }
}

impl StoreConfig {
    /// Parse a TOML document
    ///
    /// # Errors
    ///
    /// Returns `Config` if the document is malformed or fails validation.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: StoreConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from `path`, falling back to `$SNAPY_CONFIG`,
    /// then to defaults
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read and `Config` if it cannot
    /// be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let resolved: Option<PathBuf> = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from));

        match resolved {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading store config");
                let raw = std::fs::read_to_string(&path)?;
                Self::from_toml_str(&raw)
            }
            None => Ok(Self::default()),
        }
    }

    /// Render as TOML
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if rendering fails.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    fn validate(&self) -> Result<()> {
        if self.canvas.default_width == 0 || self.canvas.default_height == 0 {
            return Err(SnapyError::Config {
                message: "canvas default dimensions must be non-zero".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert!(config.seed_sample_templates);
        assert_eq!(config.delete_policy, ProjectDeletePolicy::Cascade);
        assert_eq!(config.canvas.default_width, 1920);
        assert_eq!(config.canvas.default_height, 1080);
        assert_eq!(config.plans.limit_for(Plan::Free), 10);
        assert_eq!(config.plans.limit_for(Plan::Pro), 100);
        assert_eq!(config.plans.limit_for(Plan::Enterprise), 1000);
    }

    #[test]
    fn test_empty_document_yields_defaults() {
        assert_eq!(StoreConfig::from_toml_str("").unwrap(), StoreConfig::default());
    }

    #[test]
    fn test_partial_document_overrides_only_given_keys() {
        let config = StoreConfig::from_toml_str(
            r#"
            delete_policy = "orphan"

            [plans]
            pro = 250
            "#,
        )
        .unwrap();

        assert_eq!(config.delete_policy, ProjectDeletePolicy::Orphan);
        assert_eq!(config.plans.pro, 250);
        assert_eq!(config.plans.free, 10);
        assert!(config.seed_sample_templates);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let result = StoreConfig::from_toml_str("[canvas]\ndefault_width = 0\n");
        assert!(matches!(result, Err(SnapyError::Config { .. })));
    }

    #[test]
    fn test_unknown_policy_rejected() {
        let result = StoreConfig::from_toml_str("delete_policy = \"archive\"\n");
        assert!(matches!(result, Err(SnapyError::Config { .. })));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = StoreConfig::default();
        let rendered = config.to_toml_string().unwrap();
        assert_eq!(StoreConfig::from_toml_str(&rendered).unwrap(), config);
    }
}
