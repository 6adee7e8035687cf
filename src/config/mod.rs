//! Set configuration module
//!
//! Sets carry their limits as a type parameter implementing [`SetConfig`], so
//! the limits cost nothing at runtime and cannot drift between instances of
//! the same set type.

pub mod limits;
pub mod macros;

// Re-export main types
pub use limits::{Bounded, DefaultConfig, SetConfig};
pub use macros::define_set_config;
