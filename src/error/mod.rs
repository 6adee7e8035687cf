//! Error handling module for kindset
//!
//! This module provides the error type returned by every fallible set operation.

pub mod types;

// Re-export main types
pub use types::{SetError, SetResult};
