pub mod config;
pub mod plans;
pub mod templates;
