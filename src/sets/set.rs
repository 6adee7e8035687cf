//! Thread-safe, kind-checked set
//!
//! A [`Set`] is a membership table guarded by a single reader/writer lock and
//! tagged with the one [`Kind`] its elements may have. Reads take the lock
//! shared, mutations take it exclusively, and every element offered to the set
//! is checked against the kind before the lock is taken.

use core::fmt;
use core::marker::PhantomData;
use std::collections::HashSet;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::trace;

use crate::config::{DefaultConfig, SetConfig};
use crate::element::{Kind, Value};
use crate::error::{SetError, SetResult};
use crate::traits::{Element, StaticKind};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Thread-safe set whose elements all share one declared kind
///
/// # Type Parameters
/// - `E`: The element type. [`Value`] (the default) is checked at runtime;
///   a [`StaticKind`] type such as `i64` or `String` is checked by the compiler.
///   Only `Set<Value>` takes a kind at construction; a statically-kinded set
///   is always declared with its type's kind (see [`Set::typed`] and [`Set::of`]).
/// - `C`: Configuration limiting the set's size, see [`SetConfig`]
///
/// # Concurrency
/// Every method takes `&self`; share a set between threads with `Arc`. Each
/// call is atomic on its own, but sequences of calls are not: two threads
/// doing `has` then `add` can interleave. Binary operations read the other
/// operand into a snapshot before touching the receiver, so no call ever
/// holds two locks at once.
///
/// # Example
/// ```rust
/// use kindset::prelude::*;
///
/// let set = Set::<Value>::with_items(Kind::Int, [1, 2, 3])?;
/// set.add([4])?;
/// set.remove([2])?;
///
/// assert_eq!(set.len(), 3);
/// assert!(!set.has([2])?);
/// assert!(set.add(["four"]).is_err());
/// # Ok::<(), kindset::error::SetError>(())
/// ```
pub struct Set<E = Value, C = DefaultConfig> {
    /// Declared element kind, never changes
    kind: Kind,

    /// Membership table
    table: RwLock<HashSet<E>>,

    /// Configuration marker, `fn() -> C` keeps the set `Send + Sync` for any `C`
    _config: PhantomData<fn() -> C>,
}

impl<C> Set<Value, C>
where
    C: SetConfig,
{
    /// Creates a new empty set admitting elements of `kind`
    ///
    /// # Example
    /// ```rust
    /// use kindset::prelude::*;
    /// let set = Set::<Value>::new(Kind::String);
    /// assert!(set.is_empty());
    /// assert_eq!(set.kind(), Kind::String);
    /// ```
    pub fn new(kind: Kind) -> Self {
        Self::from_table(kind, Self::empty_table())
    }

    /// Creates a set of `kind` holding `items`
    ///
    /// Construction is all-or-nothing: if any item has the wrong kind, or the
    /// items would not fit the configured limit, no set is built.
    ///
    /// # Example
    /// ```rust
    /// use kindset::prelude::*;
    /// assert!(Set::<Value>::with_items(Kind::Int, [1, 2]).is_ok());
    /// assert!(Set::<Value>::with_items(Kind::Int, [Value::from(1), Value::from("2")]).is_err());
    /// ```
    pub fn with_items<I>(kind: Kind, items: I) -> SetResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let set = Self::new(kind);
        set.add(items)?;
        Ok(set)
    }

    /// Creates a set of `kind` from every admissible item in `items`
    ///
    /// Items of the wrong kind, and items arriving after the configured limit
    /// is reached, are handed back instead of failing the construction.
    ///
    /// # Returns
    /// The set and the rejected items, in input order
    ///
    /// # Example
    /// ```rust
    /// use kindset::prelude::*;
    /// let items = [Value::from(1), Value::from("two"), Value::from(3)];
    /// let (set, rejected) = Set::<Value>::with_items_lenient(Kind::Int, items);
    /// assert_eq!(set.len(), 2);
    /// assert_eq!(rejected, vec![Value::from("two")]);
    /// ```
    pub fn with_items_lenient<I>(kind: Kind, items: I) -> (Self, Vec<Value>)
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let mut table = Self::empty_table();
        let mut rejected = Vec::new();

        for item in items.into_iter().map(Into::into) {
            let admissible = item.kind() == kind
                && (table.contains(&item) || table.len() < C::MAX_ELEMENTS);
            if admissible {
                table.insert(item);
            } else {
                rejected.push(item);
            }
        }

        trace!(%kind, size = table.len(), rejected = rejected.len(), "built set leniently");
        (Self::from_table(kind, table), rejected)
    }
}

impl<E, C> Set<E, C>
where
    E: Element,
    C: SetConfig,
{
    /// Returns the kind this set was declared with
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Adds items to the set
    ///
    /// Adding nothing succeeds without touching the set. All items are kind
    /// checked before any is inserted, so a failed call inserts nothing.
    /// Re-adding an existing element has no effect.
    ///
    /// # Returns
    /// `Ok(())`, [`SetError::TypeViolation`] for a wrongly-kinded item, or
    /// [`SetError::CapacityExceeded`] if the set would outgrow its limit
    pub fn add<I>(&self, items: I) -> SetResult<()>
    where
        I: IntoIterator,
        I::Item: Into<E>,
    {
        let items = self.checked(items)?;
        if items.is_empty() {
            return Ok(());
        }

        let mut table = self.write();
        Self::ensure_room(&table, &items)?;
        table.extend(items);

        trace!(kind = %self.kind, size = table.len(), "added to set");
        Ok(())
    }

    /// Removes items from the set
    ///
    /// Items that are not members are ignored. Like [`add`](Self::add), a kind
    /// mismatch in any item fails the whole call before anything is removed.
    pub fn remove<I>(&self, items: I) -> SetResult<()>
    where
        I: IntoIterator,
        I::Item: Into<E>,
    {
        let items = self.checked(items)?;
        if items.is_empty() {
            return Ok(());
        }

        let mut table = self.write();
        for item in &items {
            table.remove(item);
        }

        trace!(kind = %self.kind, size = table.len(), "removed from set");
        Ok(())
    }

    /// Removes every element, keeping the kind
    pub fn clear(&self) {
        let mut table = self.write();
        if C::SHRINK_ON_CLEAR {
            *table = Self::empty_table();
        } else {
            table.clear();
        }

        trace!(kind = %self.kind, "cleared set");
    }

    /// Checks whether every item is a member
    ///
    /// # Returns
    /// `Ok(false)` when given no items, `Ok(true)` only if all items are
    /// present, or [`SetError::TypeViolation`] for a wrongly-kinded item
    ///
    /// # Example
    /// ```rust
    /// use kindset::prelude::*;
    /// let set = Set::<i64>::of([1, 2]);
    /// assert!(set.has([1, 2])?);
    /// assert!(!set.has([1, 3])?);
    /// assert!(!set.has(Vec::<i64>::new())?);
    /// # Ok::<(), kindset::error::SetError>(())
    /// ```
    pub fn has<I>(&self, items: I) -> SetResult<bool>
    where
        I: IntoIterator,
        I::Item: Into<E>,
    {
        let items = self.checked(items)?;
        if items.is_empty() {
            return Ok(false);
        }

        let table = self.read();
        Ok(items.iter().all(|item| table.contains(item)))
    }

    /// Returns the number of elements in the set
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Checks if the set is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a snapshot of the elements in unspecified order
    ///
    /// Later changes to the set do not affect the returned vector.
    pub fn list(&self) -> Vec<E> {
        self.read().iter().cloned().collect()
    }

    /// Returns an independent set with the same kind and elements
    pub fn copy(&self) -> Self {
        let table = self.read().clone();
        Self::from_table(self.kind, table)
    }

    /// Returns the string elements, dropping elements of any other kind
    pub fn string_slice(&self) -> Vec<String> {
        self.read()
            .iter()
            .filter_map(|element| element.as_str().map(str::to_owned))
            .collect()
    }

    /// Returns the signed integer elements, dropping elements of any other kind
    pub fn int_slice(&self) -> Vec<i64> {
        self.read()
            .iter()
            .filter_map(Element::as_int)
            .collect()
    }

    pub(crate) fn from_table(kind: Kind, table: HashSet<E>) -> Self {
        Self {
            kind,
            table: RwLock::new(table),
            _config: PhantomData,
        }
    }

    // Every construction path allocates through here, so an inconsistent
    // configuration fails to compile as soon as a set using it is built.
    pub(crate) fn empty_table() -> HashSet<E> {
        const {
            assert!(
                C::MAX_ELEMENTS > 0,
                "MAX_ELEMENTS must allow at least one element"
            );
            assert!(
                C::INITIAL_CAPACITY <= C::MAX_ELEMENTS,
                "INITIAL_CAPACITY cannot exceed MAX_ELEMENTS"
            );
        }
        HashSet::with_capacity(C::INITIAL_CAPACITY)
    }

    // A panic never leaves the table half-updated, so a poisoned lock still
    // guards a consistent table.
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, HashSet<E>> {
        self.table.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, HashSet<E>> {
        self.table.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Collects `items` and rejects the batch if any has the wrong kind.
    fn checked<I>(&self, items: I) -> SetResult<Vec<E>>
    where
        I: IntoIterator,
        I::Item: Into<E>,
    {
        let items: Vec<E> = items.into_iter().map(Into::into).collect();
        match items.iter().find(|item| item.kind() != self.kind) {
            Some(item) => Err(SetError::TypeViolation {
                found: item.kind(),
                expected: self.kind,
            }),
            None => Ok(items),
        }
    }

    /// Fails if two sets were declared with different kinds.
    pub(crate) fn typematch(&self, other: &Self) -> SetResult<()> {
        if self.kind != other.kind {
            return Err(SetError::KindMismatch {
                left: self.kind,
                right: other.kind,
            });
        }
        Ok(())
    }

    /// Fails if inserting `items` into `table` would pass `MAX_ELEMENTS`.
    pub(crate) fn ensure_room(table: &HashSet<E>, items: &[E]) -> SetResult<()> {
        if !C::is_bounded() {
            return Ok(());
        }

        let fresh: HashSet<&E> = items.iter().filter(|item| !table.contains(*item)).collect();
        let required = table.len() + fresh.len();
        if required > C::MAX_ELEMENTS {
            return Err(SetError::CapacityExceeded {
                limit: C::MAX_ELEMENTS,
                required,
            });
        }
        Ok(())
    }
}

impl<T, C> Set<T, C>
where
    T: StaticKind,
    C: SetConfig,
{
    /// Creates an empty set of a statically-kinded element type
    ///
    /// # Example
    /// ```rust
    /// use kindset::prelude::*;
    /// let set = Set::<String>::typed();
    /// assert_eq!(set.kind(), Kind::String);
    /// ```
    ///
    /// A statically-kinded set cannot be declared with some other kind:
    /// ```compile_fail
    /// use kindset::prelude::*;
    /// let set = Set::<i64>::new(Kind::String);
    /// ```
    pub fn typed() -> Self {
        Self::from_table(T::KIND, Self::empty_table())
    }
}

impl<T> Set<T, DefaultConfig>
where
    T: StaticKind,
{
    /// Creates an unbounded set of a statically-kinded element type
    ///
    /// Cannot fail: every `T` already has the set's kind and there is no
    /// element limit.
    pub fn of<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut table = Self::empty_table();
        table.extend(items);
        Self::from_table(T::KIND, table)
    }
}

impl<T> FromIterator<T> for Set<T, DefaultConfig>
where
    T: StaticKind,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl<T, C> Default for Set<T, C>
where
    T: StaticKind,
    C: SetConfig,
{
    fn default() -> Self {
        Self::typed()
    }
}

impl<E, C> Clone for Set<E, C>
where
    E: Element,
    C: SetConfig,
{
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl<E, C> PartialEq for Set<E, C>
where
    E: Element,
    C: SetConfig,
{
    /// Sets of different kinds are never equal.
    fn eq(&self, other: &Self) -> bool {
        matches!(self.is_equal(other), Ok(true))
    }
}

impl<E, C> Eq for Set<E, C>
where
    E: Element,
    C: SetConfig,
{
}

impl<E, C> fmt::Display for Set<E, C>
where
    E: Element,
    C: SetConfig,
{
    /// Renders the set as `[e1, e2, ...]` in unspecified order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, element) in self.list().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{element}")?;
        }
        f.write_str("]")
    }
}

impl<E, C> fmt::Debug for Set<E, C>
where
    E: Element + fmt::Debug,
    C: SetConfig,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Set")
            .field("kind", &self.kind)
            .field("elements", &self.list())
            .finish()
    }
}

// Serde implementation for Set
#[cfg(feature = "serde")]
impl<E, C> Serialize for Set<E, C>
where
    E: Element + Serialize,
    C: SetConfig,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Set", 2)?;
        state.serialize_field("kind", &self.kind)?;
        state.serialize_field("elements", &self.list())?;
        state.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, E, C> Deserialize<'de> for Set<E, C>
where
    E: Element + Deserialize<'de>,
    C: SetConfig,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Repr<T> {
            kind: Kind,
            elements: Vec<T>,
        }

        let repr = Repr::<E>::deserialize(deserializer)?;
        if let Some(fixed) = E::static_kind() {
            if fixed != repr.kind {
                return Err(serde::de::Error::custom(SetError::KindMismatch {
                    left: fixed,
                    right: repr.kind,
                }));
            }
        }

        let set = Self::from_table(repr.kind, Self::empty_table());
        set.add(repr.elements).map_err(serde::de::Error::custom)?;
        Ok(set)
    }
}
