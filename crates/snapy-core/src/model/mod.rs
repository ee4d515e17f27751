pub mod asset;
pub mod export;
pub mod project;
pub mod template;
pub mod user;

pub use asset::{Asset, AssetType, NewAsset};
pub use export::{Export, ExportFormat, ExportQuality, NewExport};
pub use project::{NewProject, Project, ProjectPatch};
pub use template::{NewTemplate, Template, TemplateFilter};
pub use user::{NewUser, Plan, User, UserPatch};

/// Opaque canvas document (the editor's serialized scene)
///
/// The store never looks inside it.
pub type CanvasDocument = serde_json::Value;
