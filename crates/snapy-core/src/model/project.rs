use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::CanvasDocument;

/// A user's design
///
/// Belongs to exactly one user. `updated_at` is refreshed by every patch
/// and never falls behind `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub canvas_data: Option<CanvasDocument>,
    /// Base64 data URL or remote URL
    pub thumbnail: Option<String>,
    pub width: u32,
    pub height: u32,
    pub is_public: bool,
    /// Template this project was instantiated from, if any
    pub source_template_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied by the caller when creating a project
///
/// Unset dimensions fall back to the configured canvas defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewProject {
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub canvas_data: Option<CanvasDocument>,
    pub thumbnail: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub is_public: bool,
}

impl NewProject {
    pub fn new(user_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }
}

/// Mutable subset of a project
///
/// Owner and identity are not patchable. Nullable fields take
/// `Some(None)` to clear them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub canvas_data: Option<Option<CanvasDocument>>,
    pub thumbnail: Option<Option<String>>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub is_public: Option<bool>,
}

impl ProjectPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn apply_to(self, project: &mut Project) {
        if let Some(title) = self.title {
            project.title = title;
        }
        if let Some(description) = self.description {
            project.description = description;
        }
        if let Some(canvas) = self.canvas_data {
            project.canvas_data = canvas;
        }
        if let Some(thumbnail) = self.thumbnail {
            project.thumbnail = thumbnail;
        }
        if let Some(width) = self.width {
            project.width = width;
        }
        if let Some(height) = self.height {
            project.height = height;
        }
        if let Some(is_public) = self.is_public {
            project.is_public = is_public;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_project() -> Project {
        let now = Utc::now();
        Project {
            id: "p-1".to_string(),
            user_id: "u-1".to_string(),
            title: "Poster".to_string(),
            description: Some("draft".to_string()),
            canvas_data: None,
            thumbnail: None,
            width: 1920,
            height: 1080,
            is_public: false,
            source_template_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_patch_only_touches_given_fields() {
        let mut project = sample_project();
        ProjectPatch {
            canvas_data: Some(Some(json!({"objects": []}))),
            is_public: Some(true),
            ..Default::default()
        }
        .apply_to(&mut project);

        assert_eq!(project.title, "Poster");
        assert_eq!(project.description.as_deref(), Some("draft"));
        assert_eq!(project.canvas_data, Some(json!({"objects": []})));
        assert!(project.is_public);
    }

    #[test]
    fn test_patch_can_clear_nullable_field() {
        let mut project = sample_project();
        ProjectPatch {
            description: Some(None),
            ..Default::default()
        }
        .apply_to(&mut project);

        assert!(project.description.is_none());
    }

    #[test]
    fn test_empty_patch() {
        assert!(ProjectPatch::default().is_empty());
        assert!(!ProjectPatch::title("x").is_empty());
    }

    #[test]
    fn test_new_project_deserializes_with_missing_fields() {
        let new: NewProject =
            serde_json::from_value(json!({"userId": "u-1", "title": "Flyer"})).unwrap();
        assert_eq!(new.user_id, "u-1");
        assert_eq!(new.width, None);
        assert!(!new.is_public);
    }
}
