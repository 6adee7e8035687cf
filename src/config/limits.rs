//! Set configuration trait and presets
//!
//! This module defines the [`SetConfig`] trait that sets are parameterised
//! over, together with the unbounded [`DefaultConfig`] and the
//! [`Bounded`] preset.

/// Compile-time configuration for a set
///
/// # Example
/// ```rust
/// use kindset::prelude::*;
///
/// let set = Set::<Value, Bounded<2>>::with_items(Kind::Int, [1, 2])?;
/// assert!(set.add([3]).is_err());
/// assert_eq!(set.len(), 2);
/// # Ok::<(), kindset::error::SetError>(())
/// ```
pub trait SetConfig {
    /// Capacity the membership table is allocated with
    const INITIAL_CAPACITY: usize;

    /// Largest number of elements the set may hold
    ///
    /// `usize::MAX` means unbounded.
    const MAX_ELEMENTS: usize;

    /// Whether `clear` releases the table's allocation
    ///
    /// When false the emptied table keeps its capacity for reuse.
    const SHRINK_ON_CLEAR: bool;

    /// Validates that the configuration is consistent
    ///
    /// Sets enforce the same rules when they are built, so a set with an
    /// inconsistent configuration does not compile:
    /// ```compile_fail
    /// use kindset::prelude::*;
    /// let set = Set::<Value, Bounded<0>>::new(Kind::Int);
    /// ```
    fn validate() -> Result<(), &'static str> {
        if Self::MAX_ELEMENTS == 0 {
            return Err("MAX_ELEMENTS must allow at least one element");
        }

        if Self::INITIAL_CAPACITY > Self::MAX_ELEMENTS {
            return Err("INITIAL_CAPACITY cannot exceed MAX_ELEMENTS");
        }

        Ok(())
    }

    /// Returns true if the set has an element limit
    fn is_bounded() -> bool {
        Self::MAX_ELEMENTS != usize::MAX
    }
}

/// Unbounded configuration used when none is named
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultConfig;

impl SetConfig for DefaultConfig {
    const INITIAL_CAPACITY: usize = 0;
    const MAX_ELEMENTS: usize = usize::MAX;
    const SHRINK_ON_CLEAR: bool = true;
}

/// Configuration holding at most `N` elements
///
/// The table is allocated for all `N` elements up front and keeps that
/// allocation across `clear`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bounded<const N: usize>;

impl<const N: usize> SetConfig for Bounded<N> {
    const INITIAL_CAPACITY: usize = N;
    const MAX_ELEMENTS: usize = N;
    const SHRINK_ON_CLEAR: bool = false;
}
