//! Element trait definition
//!
//! This module defines the trait every set element type implements. The trait
//! is the seam between the runtime-checked element model ([`Value`]) and plain
//! Rust types whose kind is fixed at compile time.
//!
//! [`Value`]: crate::element::Value

use core::fmt::Display;
use core::hash::Hash;

use crate::element::{Kind, Value};

/// A type that can be stored in a [`Set`](crate::sets::Set)
///
/// Elements must be hashable for the membership table and displayable for the
/// `[e1, e2, ...]` rendering.
pub trait Element: Clone + Eq + Hash + Display {
    /// Returns the runtime kind of this element
    ///
    /// Sets compare this against their declared kind before admitting the
    /// element.
    fn kind(&self) -> Kind;

    /// Returns the kind every value of this type has, if the type fixes one
    ///
    /// Sets use this to refuse a declared kind no value of the type could
    /// ever match.
    fn static_kind() -> Option<Kind> {
        None
    }

    /// Returns the element as a string slice, if it is a string
    fn as_str(&self) -> Option<&str> {
        None
    }

    /// Returns the element as a signed integer, if it is one
    fn as_int(&self) -> Option<i64> {
        None
    }
}

/// An element type whose kind is known at compile time
///
/// Sets of a `StaticKind` type are always declared with [`StaticKind::KIND`],
/// so every value of the type already has the right kind and the runtime
/// check can never fail.
pub trait StaticKind: Element {
    /// The kind shared by every value of this type
    const KIND: Kind;
}

impl Element for Value {
    fn kind(&self) -> Kind {
        Value::kind(self)
    }

    fn as_str(&self) -> Option<&str> {
        Value::as_str(self)
    }

    fn as_int(&self) -> Option<i64> {
        Value::as_int(self)
    }
}

macro_rules! impl_static_kind {
    ($ty:ty => $kind:ident) => {
        impl Element for $ty {
            fn kind(&self) -> Kind {
                Kind::$kind
            }

            fn static_kind() -> Option<Kind> {
                Some(Kind::$kind)
            }
        }

        impl StaticKind for $ty {
            const KIND: Kind = Kind::$kind;
        }
    };
}

impl_static_kind!(bool => Bool);
impl_static_kind!(u64 => Uint);
impl_static_kind!(char => Char);

impl Element for i64 {
    fn kind(&self) -> Kind {
        Kind::Int
    }

    fn static_kind() -> Option<Kind> {
        Some(Kind::Int)
    }

    fn as_int(&self) -> Option<i64> {
        Some(*self)
    }
}

impl StaticKind for i64 {
    const KIND: Kind = Kind::Int;
}

impl Element for String {
    fn kind(&self) -> Kind {
        Kind::String
    }

    fn static_kind() -> Option<Kind> {
        Some(Kind::String)
    }

    fn as_str(&self) -> Option<&str> {
        Some(self)
    }
}

impl StaticKind for String {
    const KIND: Kind = Kind::String;
}
