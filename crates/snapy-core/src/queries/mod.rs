pub mod dashboard;

pub use dashboard::{dashboard_stats, DashboardStats};
