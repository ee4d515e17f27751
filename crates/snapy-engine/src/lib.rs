//! Snapy Engine - shared store handle
//!
//! Wraps the single-threaded `snapy_core::Store` in one guard so a host can
//! hand clones to concurrent request handlers, and owns the operation
//! boundary logging for every call.

pub mod shared_store;

pub use shared_store::SharedStore;
