use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::SnapyError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Png,
    Jpg,
    Svg,
    Pdf,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpg => "jpg",
            ExportFormat::Svg => "svg",
            ExportFormat::Pdf => "pdf",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = SnapyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "png" => Ok(ExportFormat::Png),
            "jpg" => Ok(ExportFormat::Jpg),
            "svg" => Ok(ExportFormat::Svg),
            "pdf" => Ok(ExportFormat::Pdf),
            other => Err(SnapyError::InvalidValue {
                field: "export format",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportQuality {
    Low,
    Medium,
    #[default]
    High,
}

impl fmt::Display for ExportQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExportQuality::Low => "low",
            ExportQuality::Medium => "medium",
            ExportQuality::High => "high",
        })
    }
}

impl FromStr for ExportQuality {
    type Err = SnapyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(ExportQuality::Low),
            "medium" => Ok(ExportQuality::Medium),
            "high" => Ok(ExportQuality::High),
            other => Err(SnapyError::InvalidValue {
                field: "export quality",
                value: other.to_string(),
            }),
        }
    }
}

/// A rendered file produced from a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Export {
    pub id: String,
    pub project_id: String,
    pub user_id: String,
    pub format: ExportFormat,
    pub quality: ExportQuality,
    pub url: String,
    pub size: u64,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied by the caller when recording an export
///
/// Quality falls back to `high` when unset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExport {
    pub project_id: String,
    pub user_id: String,
    pub format: ExportFormat,
    #[serde(default)]
    pub quality: Option<ExportQuality>,
    pub url: String,
    pub size: u64,
}
