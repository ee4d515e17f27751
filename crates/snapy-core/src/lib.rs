//! Snapy Core - in-memory repository store for the Snapy design editor
//!
//! This crate owns the five entity collections and their contracts:
//! - User, Project, Template, Asset and Export models with typed patches
//! - Identity assignment, default materialization and timestamp upkeep
//! - Owner/project/category filters over insertion-ordered collections
//! - AI generation quota accounting and plan changes
//! - Template instantiation, orphan sweeping and dashboard statistics
//!
//! The store is volatile and single-threaded; see `snapy-engine` for the
//! shared, logged handle.

pub mod config;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod queries;

pub use snapy_core_types::schema;

// Re-export commonly used types
pub use config::{ProjectDeletePolicy, StoreConfig};
pub use errors::{ExError, ExErrorKind, Result, SnapyError};
pub use model::{
    Asset, AssetType, Export, ExportFormat, ExportQuality, NewAsset, NewExport, NewProject,
    NewTemplate, NewUser, Plan, Project, ProjectPatch, Template, TemplateFilter, User, UserPatch,
};
pub use ops::{GenerationOutcome, GenerationRecord, Store, SweepReport};
pub use queries::{dashboard_stats, DashboardStats};
