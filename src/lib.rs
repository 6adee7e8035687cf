#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]

//! **Thread-safe, kind-checked sets**
//!
//! kindset provides [`Set`], a set container that many threads can read and
//! write at once without any locking of their own. Every set is declared with
//! a single element [`Kind`]; elements of any other kind are rejected, and two
//! sets can only be combined when their kinds agree.
//!
//! ## Features
//!
//! - **One lock per set** - shared access for reads, exclusive access for writes
//! - **Homogeneous by construction** - every element is kind checked before it is stored
//! - **Full set algebra** - union, intersection, difference, symmetric difference,
//!   in-place merge and separate, subset/superset/equality queries
//! - **Static or dynamic elements** - `Set<Value>` checks kinds at runtime,
//!   `Set<i64>` or `Set<String>` let the compiler do it
//! - **Compile-time limits** - optional element caps through [`SetConfig`]
//!
//! ### Optional Features
//! - `serde` - Serde serialization support
//!
//! ## Quick Start
//!
//! ```rust
//! use kindset::prelude::*;
//!
//! fn example() -> Result<(), SetError> {
//!     let a = Set::<Value>::with_items(Kind::Int, [1, 2, 3])?;
//!     let b = Set::<Value>::with_items(Kind::Int, [2, 3, 4])?;
//!
//!     assert_eq!(a.intersection(&b)?.len(), 2);
//!     assert_eq!(a.symmetric_difference(&b)?.len(), 2);
//!
//!     // Elements and sets of another kind are refused
//!     assert!(a.add(["five"]).is_err());
//!     let names = Set::<Value>::with_items(Kind::String, ["five"])?;
//!     assert!(a.union(&names).is_err());
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Ordering
//!
//! Sets are unordered. [`Set::list`], [`Set::string_slice`], [`Set::int_slice`]
//! and the `Display` rendering return elements in whatever order the table
//! yields them, which may change between calls.
//!
//! [`Set`]: crate::sets::Set
//! [`Set::list`]: crate::sets::Set::list
//! [`Set::string_slice`]: crate::sets::Set::string_slice
//! [`Set::int_slice`]: crate::sets::Set::int_slice
//! [`Kind`]: crate::element::Kind
//! [`SetConfig`]: crate::config::SetConfig

#![deny(missing_docs)]
#![warn(clippy::all)]

// Core infrastructure modules
pub mod config;
pub mod element;
pub mod error;
pub mod traits;

// Set container
pub mod sets;

/// Prelude module of kindset
///
/// Convenient re-exports for common kindset types and traits
pub mod prelude {

    // Re-export core traits
    pub use crate::traits::*;

    // Re-export configuration
    pub use crate::config::{Bounded, DefaultConfig, SetConfig, define_set_config};

    // Re-export error types
    pub use crate::error::{SetError, SetResult};

    // Re-export element types
    pub use crate::element::{Kind, Value};

    // Re-export the set
    pub use crate::sets::Set;
}
