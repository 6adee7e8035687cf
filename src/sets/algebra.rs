//! Set algebra
//!
//! Binary operations between two sets of the same kind. Each operation checks
//! the kinds first and fails with [`SetError::KindMismatch`] before reading
//! or writing either operand.
//!
//! The operand that is only read is copied into a snapshot under its own
//! shared lock, and that lock is released before the receiver is locked. An
//! operation is therefore not atomic across both sets, but `a.merge(&a)` and
//! concurrent `a.merge(&b)` / `b.merge(&a)` cannot deadlock.
//!
//! [`SetError::KindMismatch`]: crate::error::SetError::KindMismatch

use std::collections::HashSet;

use tracing::trace;

use crate::config::SetConfig;
use crate::error::{SetError, SetResult};
use crate::sets::Set;
use crate::traits::Element;

impl<E, C> Set<E, C>
where
    E: Element,
    C: SetConfig,
{
    /// Checks whether both sets hold the same elements
    ///
    /// # Returns
    /// true if the sets have equal size and every element of `other` is in
    /// `self`, or [`SetError::KindMismatch`]
    pub fn is_equal(&self, other: &Self) -> SetResult<bool> {
        self.typematch(other)?;

        let theirs = other.list();
        let table = self.read();
        Ok(table.len() == theirs.len() && theirs.iter().all(|element| table.contains(element)))
    }

    /// Checks whether every element of `other` is in `self`
    ///
    /// Note the direction: the receiver is the containing set.
    ///
    /// # Example
    /// ```rust
    /// use kindset::prelude::*;
    /// let all = Set::<i64>::of([1, 2, 3]);
    /// let some = Set::<i64>::of([1, 2]);
    /// assert!(all.is_subset(&some)?);
    /// assert!(!some.is_subset(&all)?);
    /// # Ok::<(), kindset::error::SetError>(())
    /// ```
    pub fn is_subset(&self, other: &Self) -> SetResult<bool> {
        self.typematch(other)?;

        let theirs = other.list();
        let table = self.read();
        Ok(theirs.iter().all(|element| table.contains(element)))
    }

    /// Checks whether every element of `self` is in `other`
    ///
    /// Defined as `other.is_subset(self)`.
    pub fn is_superset(&self, other: &Self) -> SetResult<bool> {
        other.is_subset(self)
    }

    /// Returns a new set with the elements of either set
    ///
    /// # Example
    /// ```rust
    /// use kindset::prelude::*;
    /// let a = Set::<Value>::with_items(Kind::Int, [1, 2, 3])?;
    /// let b = Set::<Value>::with_items(Kind::Int, [2, 3, 4])?;
    /// assert_eq!(a.union(&b)?.len(), 4);
    ///
    /// let names = Set::<Value>::with_items(Kind::String, ["a"])?;
    /// assert!(a.union(&names).is_err());
    /// # Ok::<(), kindset::error::SetError>(())
    /// ```
    pub fn union(&self, other: &Self) -> SetResult<Self> {
        self.typematch(other)?;

        let mut table = self.read().clone();
        table.extend(other.list());
        self.derived(table)
    }

    /// Returns a new set with the elements present in both sets
    pub fn intersection(&self, other: &Self) -> SetResult<Self> {
        self.typematch(other)?;

        let mine = self.list();
        let theirs = other.read();
        let table = mine
            .into_iter()
            .filter(|element| theirs.contains(element))
            .collect();
        drop(theirs);
        self.derived(table)
    }

    /// Returns a new set with the elements of `self` that are not in `other`
    pub fn difference(&self, other: &Self) -> SetResult<Self> {
        self.typematch(other)?;

        let mine = self.list();
        let theirs = other.read();
        let table = mine
            .into_iter()
            .filter(|element| !theirs.contains(element))
            .collect();
        drop(theirs);
        self.derived(table)
    }

    /// Returns a new set with the elements in exactly one of the two sets
    ///
    /// Computed as the union of `self − other` and `other − self`.
    pub fn symmetric_difference(&self, other: &Self) -> SetResult<Self> {
        self.typematch(other)?;

        let left = self.difference(other)?;
        let right = other.difference(self)?;
        left.union(&right)
    }

    /// Adds every element of `other` to `self`
    ///
    /// `other` is left unchanged. Fails without changing `self` if the kinds
    /// differ or the result would outgrow the configured limit.
    pub fn merge(&self, other: &Self) -> SetResult<()> {
        self.typematch(other)?;

        let theirs = other.list();
        if theirs.is_empty() {
            return Ok(());
        }

        let mut table = self.write();
        Self::ensure_room(&table, &theirs)?;
        table.extend(theirs);

        trace!(kind = %self.kind(), size = table.len(), "merged set");
        Ok(())
    }

    /// Removes every element of `other` from `self`
    ///
    /// Not the inverse of [`merge`](Self::merge): elements `self` already held
    /// before a merge are removed too.
    pub fn separate(&self, other: &Self) -> SetResult<()> {
        self.typematch(other)?;

        let theirs = other.list();
        if theirs.is_empty() {
            return Ok(());
        }

        let mut table = self.write();
        for element in &theirs {
            table.remove(element);
        }

        trace!(kind = %self.kind(), size = table.len(), "separated set");
        Ok(())
    }

    /// Wraps an operation result in a new set of this set's kind.
    fn derived(&self, table: HashSet<E>) -> SetResult<Self> {
        if table.len() > C::MAX_ELEMENTS {
            return Err(SetError::CapacityExceeded {
                limit: C::MAX_ELEMENTS,
                required: table.len(),
            });
        }
        Ok(Self::from_table(self.kind(), table))
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Bounded;
    use crate::element::{Kind, Value};
    use crate::error::SetError;
    use crate::sets::Set;

    fn ints(items: &[i64]) -> Set {
        Set::with_items(Kind::Int, items.iter().copied()).unwrap()
    }

    fn sorted(set: &Set) -> Vec<i64> {
        let mut elements = set.int_slice();
        elements.sort_unstable();
        elements
    }

    #[test]
    fn test_union() {
        let a = ints(&[1, 2, 3]);
        let b = ints(&[2, 3, 4]);

        let union = a.union(&b).unwrap();
        assert_eq!(sorted(&union), vec![1, 2, 3, 4]);

        // Original sets should be unchanged
        assert_eq!(a.len(), 3);
        assert_eq!(b.len(), 3);
    }

    #[test]
    fn test_intersection() {
        let a = ints(&[1, 2, 3]);
        let b = ints(&[2, 3, 4]);
        assert_eq!(sorted(&a.intersection(&b).unwrap()), vec![2, 3]);
    }

    #[test]
    fn test_difference() {
        let a = ints(&[1, 2, 3]);
        let b = ints(&[2, 3, 4]);
        assert_eq!(sorted(&a.difference(&b).unwrap()), vec![1]);
        assert_eq!(sorted(&b.difference(&a).unwrap()), vec![4]);
        assert!(a.difference(&a).unwrap().is_empty());
    }

    #[test]
    fn test_symmetric_difference() {
        let a = ints(&[1, 2, 3]);
        let b = ints(&[2, 3, 4]);
        assert_eq!(sorted(&a.symmetric_difference(&b).unwrap()), vec![1, 4]);
    }

    #[test]
    fn test_merge() {
        let a = ints(&[1, 2]);
        let b = ints(&[2, 3]);

        a.merge(&b).unwrap();
        assert_eq!(sorted(&a), vec![1, 2, 3]);
        assert_eq!(sorted(&b), vec![2, 3]);

        // Merging a set into itself is a no-op
        a.merge(&a).unwrap();
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn test_separate() {
        let a = ints(&[1, 2, 3]);
        let b = ints(&[2, 3, 4]);

        a.separate(&b).unwrap();
        assert_eq!(sorted(&a), vec![1]);
        assert_eq!(b.len(), 3);

        a.separate(&a).unwrap();
        assert!(a.is_empty());
    }

    #[test]
    fn test_separate_is_not_inverse_of_merge() {
        let a = ints(&[1, 2]);
        let b = ints(&[2, 3]);

        a.merge(&b).unwrap();
        a.separate(&b).unwrap();
        assert_eq!(sorted(&a), vec![1]);
    }

    #[test]
    fn test_subset_superset() {
        let small = ints(&[1, 2]);
        let large = ints(&[1, 2, 3]);

        assert!(large.is_subset(&small).unwrap());
        assert!(!small.is_subset(&large).unwrap());

        assert!(small.is_superset(&large).unwrap());
        assert!(!large.is_superset(&small).unwrap());

        let empty = ints(&[]);
        assert!(small.is_subset(&empty).unwrap());
    }

    #[test]
    fn test_is_equal() {
        let a = ints(&[1, 2]);
        let b = ints(&[2, 1]);
        let c = ints(&[1, 3]);

        assert!(a.is_equal(&b).unwrap());
        assert!(!a.is_equal(&c).unwrap());
        assert!(!a.is_equal(&ints(&[1])).unwrap());
    }

    #[test]
    fn test_kind_mismatch() {
        let numbers = ints(&[1]);
        let names = Set::<Value>::with_items(Kind::String, ["1"]).unwrap();
        let expected = SetError::KindMismatch {
            left: Kind::Int,
            right: Kind::String,
        };

        assert_eq!(numbers.union(&names).unwrap_err(), expected);
        assert_eq!(numbers.intersection(&names).unwrap_err(), expected);
        assert_eq!(numbers.difference(&names).unwrap_err(), expected);
        assert_eq!(numbers.symmetric_difference(&names).unwrap_err(), expected);
        assert_eq!(numbers.merge(&names).unwrap_err(), expected);
        assert_eq!(numbers.separate(&names).unwrap_err(), expected);
        assert_eq!(numbers.is_equal(&names).unwrap_err(), expected);
        assert_eq!(numbers.is_subset(&names).unwrap_err(), expected);
        assert!(numbers.is_superset(&names).is_err());

        assert_eq!(numbers.len(), 1);
        assert_eq!(names.len(), 1);
        assert_ne!(numbers, names);
    }

    #[test]
    fn test_bounded_merge_is_all_or_nothing() {
        let a = Set::<Value, Bounded<3>>::with_items(Kind::Int, [1, 2]).unwrap();
        let b = Set::<Value, Bounded<3>>::with_items(Kind::Int, [3, 4]).unwrap();

        let err = a.merge(&b).unwrap_err();
        assert_eq!(
            err,
            SetError::CapacityExceeded {
                limit: 3,
                required: 4
            }
        );
        assert_eq!(a.len(), 2);

        assert!(a.union(&b).is_err());
        assert!(a.symmetric_difference(&b).is_err());
        assert_eq!(a.intersection(&b).unwrap().len(), 0);
    }
}
