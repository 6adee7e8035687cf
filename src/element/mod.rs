//! Element model
//!
//! This module defines the kind tag every set is declared with and the
//! dynamically-kinded [`Value`] that `Set<Value>` stores.

pub mod kind;
pub mod value;

// Re-export main types
pub use kind::Kind;
pub use value::Value;
