//! Set implementations
//!
//! This module provides the thread-safe, kind-checked [`Set`] and its set
//! algebra.

pub mod algebra;
pub mod set;

// Re-export main types
pub use set::Set;
