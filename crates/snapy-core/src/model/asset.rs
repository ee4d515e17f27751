use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::SnapyError;

/// Kind of uploaded or generated media
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetType {
    Image,
    Background,
    Icon,
    AiGenerated,
}

impl AssetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Image => "image",
            AssetType::Background => "background",
            AssetType::Icon => "icon",
            AssetType::AiGenerated => "ai-generated",
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetType {
    type Err = SnapyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image" => Ok(AssetType::Image),
            "background" => Ok(AssetType::Background),
            "icon" => Ok(AssetType::Icon),
            "ai-generated" => Ok(AssetType::AiGenerated),
            other => Err(SnapyError::InvalidValue {
                field: "asset type",
                value: other.to_string(),
            }),
        }
    }
}

/// An uploaded or generated media file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub user_id: String,
    /// Project the asset was attached to, if any
    pub project_id: Option<String>,
    pub filename: String,
    pub url: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    /// Size in bytes (0 when unknown, e.g. remote AI images)
    pub size: u64,
    pub ai_prompt: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAsset {
    pub user_id: String,
    #[serde(default)]
    pub project_id: Option<String>,
    pub filename: String,
    pub url: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub size: u64,
    #[serde(default)]
    pub ai_prompt: Option<String>,
}

impl NewAsset {
    pub fn new(
        user_id: impl Into<String>,
        filename: impl Into<String>,
        url: impl Into<String>,
        asset_type: AssetType,
        size: u64,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            project_id: None,
            filename: filename.into(),
            url: url.into(),
            asset_type,
            size,
            ai_prompt: None,
        }
    }

    pub fn in_project(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }
}
