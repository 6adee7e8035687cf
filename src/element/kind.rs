//! Element kind tags
//!
//! A [`Kind`] names the single runtime type a set admits. It is fixed when the
//! set is constructed and compared on every mutating and binary operation.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The admissible runtime type of a set's elements
///
/// Integer widths collapse into one kind per signedness: every signed integer
/// is an [`Kind::Int`], every unsigned integer a [`Kind::Uint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Kind {
    /// `true` / `false`
    Bool,
    /// Signed integers, widened to `i64`
    Int,
    /// Unsigned integers, widened to `u64`
    Uint,
    /// Floating point numbers, widened to `f64`
    Float,
    /// Unicode scalar values
    Char,
    /// Owned UTF-8 strings
    String,
    /// Raw byte strings
    Bytes,
}

impl Kind {
    /// All kinds, in declaration order
    pub const ALL: [Kind; 7] = [
        Kind::Bool,
        Kind::Int,
        Kind::Uint,
        Kind::Float,
        Kind::Char,
        Kind::String,
        Kind::Bytes,
    ];

    /// Returns the lowercase name used in error messages
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Uint => "uint",
            Kind::Float => "float",
            Kind::Char => "char",
            Kind::String => "string",
            Kind::Bytes => "bytes",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
