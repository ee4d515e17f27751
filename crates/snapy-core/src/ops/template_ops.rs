use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::Utc;
use serde_json::json;

use super::project_ops::dimension_or;
use super::store::{new_id, Store};
use crate::errors::{Result, SnapyError};
use crate::model::{NewProject, NewTemplate, Project, Template};

/// Add a template to the catalog
///
/// Unset or zero dimensions take the configured canvas defaults.
pub fn create_template(store: &mut Store, new: NewTemplate) -> Template {
    let canvas = &store.config.canvas;
    let template = Template {
        id: new_id(),
        title: new.title,
        description: new.description,
        category: new.category,
        canvas_data: new.canvas_data,
        thumbnail: new.thumbnail,
        width: dimension_or(new.width, canvas.default_width),
        height: dimension_or(new.height, canvas.default_height),
        is_premium: new.is_premium,
        created_at: Utc::now(),
    };

    store.templates.insert(template.id.clone(), template.clone());
    template
}

/// Start a new project from a template
///
/// Copies canvas, thumbnail, description and dimensions. The title
/// defaults to the template's title.
///
/// # Errors
/// * `TemplateNotFound` - If the template doesn't exist
pub fn create_project_from_template(
    store: &mut Store,
    template_id: &str,
    user_id: &str,
    title: Option<String>,
) -> Result<Project> {
    let template = store
        .get_template(template_id)
        .ok_or_else(|| SnapyError::TemplateNotFound {
            template_id: template_id.to_string(),
        })?;

    let new = NewProject {
        user_id: user_id.to_string(),
        title: title.unwrap_or_else(|| template.title.clone()),
        description: template.description.clone(),
        canvas_data: Some(template.canvas_data.clone()),
        thumbnail: Some(template.thumbnail.clone()),
        width: Some(template.width),
        height: Some(template.height),
        is_public: false,
    };

    let mut project = super::project_ops::create_project(store, new);
    project.source_template_id = Some(template_id.to_string());
    store
        .projects
        .insert(project.id.clone(), project.clone());
    Ok(project)
}

/// Gradient thumbnail as an SVG data URL
fn gradient_thumbnail(width: u32, height: u32, from: &str, to: &str) -> String {
    let svg = format!(
        concat!(
            r#"<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" fill="none" xmlns="http://www.w3.org/2000/svg">"#,
            r#"<rect width="{w}" height="{h}" fill="url(#g)"/>"#,
            r#"<defs><linearGradient id="g" x1="0" y1="0" x2="{w}" y2="{h}" gradientUnits="userSpaceOnUse">"#,
            r#"<stop stop-color="{from}"/><stop offset="1" stop-color="{to}"/>"#,
            r#"</linearGradient></defs></svg>"#
        ),
        w = width,
        h = height,
        from = from,
        to = to,
    );
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}

fn gradient_canvas(width: u32, height: u32, from: &str, to: &str) -> serde_json::Value {
    json!({
        "version": "5.3.0",
        "objects": [{
            "type": "rect",
            "left": 0,
            "top": 0,
            "width": width,
            "height": height,
            "fill": format!("linear-gradient(135deg, {from} 0%, {to} 100%)"),
        }]
    })
}

/// Load the built-in catalog: a square social post and a 16:9 slide
pub fn seed_sample_templates(store: &mut Store) -> Vec<Template> {
    let samples = [
        NewTemplate {
            title: "Social Media Post".to_string(),
            description: Some("Perfect for Instagram, Twitter, and Facebook content".to_string()),
            category: "social-media".to_string(),
            canvas_data: gradient_canvas(1080, 1080, "#667eea", "#764ba2"),
            thumbnail: gradient_thumbnail(300, 300, "#667EEA", "#764BA2"),
            width: Some(1080),
            height: Some(1080),
            is_premium: false,
        },
        NewTemplate {
            title: "Presentation Slide".to_string(),
            description: Some("Professional slides for business presentations".to_string()),
            category: "presentation".to_string(),
            canvas_data: gradient_canvas(1920, 1080, "#0072FF", "#00C6FF"),
            thumbnail: gradient_thumbnail(300, 169, "#0072FF", "#00C6FF"),
            width: Some(1920),
            height: Some(1080),
            is_premium: false,
        },
    ];

    let seeded: Vec<Template> = samples
        .into_iter()
        .map(|new| create_template(store, new))
        .collect();
    tracing::debug!(count = seeded.len(), "sample templates seeded");
    seeded
}
