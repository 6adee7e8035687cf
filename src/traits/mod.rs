//! Core traits module
//!
//! This module defines the traits a type implements to be stored in a set.

pub mod element;

// Re-export main traits
pub use element::{Element, StaticKind};
