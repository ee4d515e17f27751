use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::CanvasDocument;

/// A reusable starting design
///
/// Templates have no owner; using one copies its canvas into a new project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    /// e.g. `social-media`, `presentation`, `app-mockup`
    pub category: String,
    pub canvas_data: CanvasDocument,
    pub thumbnail: String,
    pub width: u32,
    pub height: u32,
    pub is_premium: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTemplate {
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub canvas_data: CanvasDocument,
    pub thumbnail: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    #[serde(default)]
    pub is_premium: bool,
}

/// Equality predicates for template listing; `None` matches everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateFilter {
    pub category: Option<String>,
    pub is_premium: Option<bool>,
}

impl TemplateFilter {
    pub fn category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            is_premium: None,
        }
    }

    pub fn premium(mut self, is_premium: bool) -> Self {
        self.is_premium = Some(is_premium);
        self
    }

    pub fn matches(&self, template: &Template) -> bool {
        self.category
            .as_deref()
            .map_or(true, |c| template.category == c)
            && self.is_premium.map_or(true, |p| template.is_premium == p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn template(category: &str, is_premium: bool) -> Template {
        Template {
            id: "t".to_string(),
            title: "T".to_string(),
            description: None,
            category: category.to_string(),
            canvas_data: json!({}),
            thumbnail: String::new(),
            width: 1080,
            height: 1080,
            is_premium,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let filter = TemplateFilter::default();
        assert!(filter.matches(&template("social-media", false)));
        assert!(filter.matches(&template("presentation", true)));
    }

    #[test]
    fn test_filter_combines_predicates() {
        let filter = TemplateFilter::category("social-media").premium(true);
        assert!(filter.matches(&template("social-media", true)));
        assert!(!filter.matches(&template("social-media", false)));
        assert!(!filter.matches(&template("presentation", true)));
    }
}
