//! Key-projection equality.
//!
//! [`KeyEq`] turns a projection `Fn(&T) -> K` into an equality and hash
//! strategy for `T`. Both halves delegate to the key type's own `PartialEq`
//! and `Hash` impls, so two elements that compare equal always hash equal.

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Equality and hashing of `T` through a projected key `K`.
///
/// The projection is called every time a key is needed. It must be pure:
/// adapters may project the same element more than once.
///
/// # Example
///
/// ```
/// use clave_ext_seq::Compare;
///
/// struct User {
///     id: u32,
///     name: String,
/// }
///
/// let by_id = Compare::<User>::using(|u| u.id);
///
/// let a = User { id: 7, name: "ada".into() };
/// let b = User { id: 7, name: "grace".into() };
///
/// assert!(by_id.equals(&a, &b));
/// assert_eq!(by_id.hash(&a), by_id.hash(&b));
/// ```
pub struct KeyEq<T: ?Sized, K, F> {
    project: F,
    _marker: PhantomData<fn(&T) -> K>,
}

impl<T: ?Sized, K, F> KeyEq<T, K, F>
where
    F: Fn(&T) -> K,
{
    /// Creates a functor comparing elements by `project`.
    pub fn new(project: F) -> Self {
        KeyEq {
            project,
            _marker: PhantomData,
        }
    }

    /// Projects an element to its key.
    pub fn key(&self, item: &T) -> K {
        (self.project)(item)
    }

    /// Returns `true` if both elements project to equal keys.
    pub fn equals(&self, a: &T, b: &T) -> bool
    where
        K: PartialEq,
    {
        self.key(a) == self.key(b)
    }

    /// Hashes the projected key of an element.
    pub fn hash(&self, item: &T) -> u64
    where
        K: Hash,
    {
        let mut hasher = DefaultHasher::new();
        self.hash_into(item, &mut hasher);
        hasher.finish()
    }

    /// Feeds the projected key of an element into an existing hasher.
    pub fn hash_into<H: Hasher>(&self, item: &T, state: &mut H)
    where
        K: Hash,
    {
        self.key(item).hash(state);
    }

    /// Wraps a borrowed element so standard containers see this functor's
    /// equality instead of the element's own.
    ///
    /// ```
    /// use std::collections::HashSet;
    /// use clave_ext_seq::compare_by;
    ///
    /// let words = ["apple", "avocado", "banana"];
    /// let by_initial = compare_by(|w: &&str| w.chars().next());
    ///
    /// let initials: HashSet<_> = words.iter().map(|w| by_initial.keyed(w)).collect();
    /// assert_eq!(initials.len(), 2);
    /// ```
    pub fn keyed<'a>(&'a self, item: &'a T) -> Keyed<'a, T, K, F> {
        Keyed { item, eq: self }
    }

    /// Consumes the functor, returning the projection.
    pub fn into_inner(self) -> F {
        self.project
    }
}

impl<T: ?Sized, K, F: Clone> Clone for KeyEq<T, K, F> {
    fn clone(&self) -> Self {
        KeyEq {
            project: self.project.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T: ?Sized, K, F> fmt::Debug for KeyEq<T, K, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyEq").finish_non_exhaustive()
    }
}

/// Entry point mirroring `Compare::<T>::using(..)`, with `T` fixed up front so
/// closure parameter types are inferred.
pub struct Compare<T: ?Sized>(PhantomData<fn(&T)>);

impl<T: ?Sized> Compare<T> {
    /// Builds a [`KeyEq`] for `T` from a projection.
    pub fn using<K, F>(project: F) -> KeyEq<T, K, F>
    where
        F: Fn(&T) -> K,
    {
        KeyEq::new(project)
    }
}

/// Builds a [`KeyEq`] from a projection with an annotated parameter type.
pub fn compare_by<T: ?Sized, K, F>(project: F) -> KeyEq<T, K, F>
where
    F: Fn(&T) -> K,
{
    KeyEq::new(project)
}

/// A borrowed element that compares and hashes through a [`KeyEq`].
///
/// Equality uses the left-hand side's functor for both elements, so only
/// mix `Keyed` values created from the same functor.
pub struct Keyed<'a, T: ?Sized, K, F> {
    item: &'a T,
    eq: &'a KeyEq<T, K, F>,
}

impl<'a, T: ?Sized, K, F> Keyed<'a, T, K, F> {
    /// Returns the wrapped element.
    pub fn item(&self) -> &'a T {
        self.item
    }
}

impl<T: ?Sized, K, F> Clone for Keyed<'_, T, K, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized, K, F> Copy for Keyed<'_, T, K, F> {}

impl<T: ?Sized, K, F> PartialEq for Keyed<'_, T, K, F>
where
    F: Fn(&T) -> K,
    K: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.eq.equals(self.item, other.item)
    }
}

impl<T: ?Sized, K, F> Eq for Keyed<'_, T, K, F>
where
    F: Fn(&T) -> K,
    K: Eq,
{
}

impl<T: ?Sized, K, F> Hash for Keyed<'_, T, K, F>
where
    F: Fn(&T) -> K,
    K: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.eq.hash_into(self.item, state);
    }
}

impl<T: ?Sized + fmt::Debug, K, F> fmt::Debug for Keyed<'_, T, K, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Keyed").field(&self.item).finish()
    }
}
