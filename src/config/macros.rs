//! Set configuration macros
//!
//! This module provides the `define_set_config!` macro for easy creation
//! of custom set configurations.

/// Macro to define a custom set configuration
///
/// This macro creates a new struct that implements the `SetConfig` trait
/// with user-specified values. Omitted fields take the values of
/// `DefaultConfig`.
///
/// # Example
///
/// ```rust
/// use kindset::config::{define_set_config, SetConfig};
///
/// define_set_config! {
///     name: SessionConfig,
///     initial_capacity: 64,
///     max_elements: 10_000,
/// }
///
/// assert!(SessionConfig::validate().is_ok());
/// ```
///
/// A configuration that reserves more than it may hold is refused once a set
/// uses it:
///
/// ```compile_fail
/// use kindset::prelude::*;
///
/// define_set_config! {
///     name: Oversized,
///     initial_capacity: 8,
///     max_elements: 4,
/// }
///
/// let set = Set::<Value, Oversized>::new(Kind::Int);
/// ```
#[macro_export]
macro_rules! define_set_config {
    (
        name: $name:ident
        $(, initial_capacity: $capacity:expr)?
        $(, max_elements: $max:expr)?
        $(, shrink_on_clear: $shrink:expr)?
        $(,)?
    ) => {
        /// Custom set configuration
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl $crate::config::SetConfig for $name {
            const INITIAL_CAPACITY: usize = $crate::define_set_config!(@default $($capacity)?, 0);
            const MAX_ELEMENTS: usize = $crate::define_set_config!(@default $($max)?, usize::MAX);
            const SHRINK_ON_CLEAR: bool = $crate::define_set_config!(@default $($shrink)?, true);
        }
    };

    // Helper macro for default values
    (@default $value:expr, $default:expr) => { $value };
    (@default , $default:expr) => { $default };
}

// Re-export the macro for convenience
pub use define_set_config;
