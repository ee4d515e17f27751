//! Core types shared across Snapy facilities
//!
//! This crate provides foundational types used by the error handling,
//! logging and model layers:
//!
//! - **Sensitive data**: Sensitive<T> marker for automatic redaction
//! - **Schema constants**: Canonical field keys and event names

pub mod schema;
pub mod sensitive;

pub use sensitive::Sensitive;
