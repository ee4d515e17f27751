pub mod asset_ops;
pub mod export_ops;
pub mod project_ops;
pub mod quota_ops;
pub mod store;
pub mod template_ops;
pub mod user_ops;

pub use project_ops::SweepReport;
pub use quota_ops::{GenerationOutcome, GenerationRecord};
pub use store::Store;
