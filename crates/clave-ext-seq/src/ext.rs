//! Extension traits attaching the adapters to iterators and plain values.

use std::hash::Hash;
use std::iter::{once, Chain, Once};

use crate::distinct::{DistinctBy, ExceptBy};
use crate::filter::{WhereNot, WhereNotNone, WhereNotNoneBy};
use crate::group::GroupByProp;
use crate::join::InnerJoin;
use crate::tap::Tap;
use crate::tuple::{Map2, Map3};

/// Sequence operators available on every [`Iterator`].
///
/// Adapters returned from these methods are lazy: nothing is pulled from the
/// source until the adapter itself is iterated. Callbacks that panic are not
/// caught; the panic surfaces when the offending item is processed.
pub trait SeqExt: Iterator {
    /// Returns `true` if the sequence is empty.
    ///
    /// Pulls at most one item.
    fn not_any(mut self) -> bool
    where
        Self: Sized,
    {
        self.next().is_none()
    }

    /// Returns `true` if no item satisfies `predicate`.
    ///
    /// Stops at the first match.
    fn not_any_matching<P>(mut self, mut predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        !self.any(|item| predicate(&item))
    }

    /// Keeps the items for which `predicate` returns `false`.
    fn where_not<P>(self, predicate: P) -> WhereNot<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        WhereNot::new(self, predicate)
    }

    /// Drops the `None` items of an iterator of options, unwrapping the rest.
    fn where_not_none<T>(self) -> WhereNotNone<Self>
    where
        Self: Sized + Iterator<Item = Option<T>>,
    {
        WhereNotNone::new(self)
    }

    /// Keeps the items for which `map` returns `Some`.
    fn where_not_none_by<K, F>(self, map: F) -> WhereNotNoneBy<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> Option<K>,
    {
        WhereNotNoneBy::new(self, map)
    }

    /// Collects into a `Vec`.
    ///
    /// Collecting a `Vec`'s own owning iterator reuses its buffer.
    fn to_list(self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        self.collect()
    }

    /// Yields the first item seen for each distinct projected key.
    ///
    /// ```
    /// use clave_ext_seq::SeqExt;
    ///
    /// let words = ["apple", "avocado", "banana", "blueberry", "cherry"];
    /// let firsts: Vec<_> = words.into_iter().distinct_by(|w| w.chars().next()).collect();
    /// assert_eq!(firsts, ["apple", "banana", "cherry"]);
    /// ```
    fn distinct_by<K, F>(self, project: F) -> DistinctBy<Self, K, F>
    where
        Self: Sized,
        K: Hash + Eq,
        F: Fn(&Self::Item) -> K,
    {
        DistinctBy::new(self, project)
    }

    /// Groups items by `key_fn`, merging the groups whose keys share a
    /// `prop_fn` value.
    ///
    /// Groups come out in the order their property was first seen and are
    /// labelled with the first raw key seen for that property. Items keep
    /// their source order within a group.
    ///
    /// ```
    /// use clave_ext_seq::SeqExt;
    ///
    /// let groups: Vec<_> = ["12", "13", "22", "21"]
    ///     .into_iter()
    ///     .group_by_prop(|s| s.to_string(), |key| key.chars().next())
    ///     .collect();
    ///
    /// assert_eq!(groups.len(), 2);
    /// assert_eq!(groups[0].key(), "12");
    /// assert_eq!(groups[1].key(), "22");
    /// ```
    fn group_by_prop<K, P, KF, PF>(self, key_fn: KF, prop_fn: PF) -> GroupByProp<Self, K, P, KF, PF>
    where
        Self: Sized,
        P: Hash + Eq,
        KF: Fn(&Self::Item) -> K,
        PF: Fn(&K) -> P,
    {
        GroupByProp::new(self, key_fn, prop_fn)
    }

    /// Groups items by key, in first-seen key order.
    #[allow(clippy::type_complexity)]
    fn group_by_key<K, KF>(self, key_fn: KF) -> GroupByProp<Self, K, K, KF, fn(&K) -> K>
    where
        Self: Sized,
        K: Clone + Hash + Eq,
        KF: Fn(&Self::Item) -> K,
    {
        GroupByProp::new(self, key_fn, K::clone as fn(&K) -> K)
    }

    /// Keeps the items whose projected key does not occur among the projected
    /// keys of `second`.
    ///
    /// Every item of `self` is tested on its own, so duplicates survive
    /// together.
    fn except_by<J, K, F>(self, second: J, project: F) -> ExceptBy<Self, J::IntoIter, K, F>
    where
        Self: Sized,
        J: IntoIterator<Item = Self::Item>,
        K: Hash + Eq,
        F: Fn(&Self::Item) -> K,
    {
        ExceptBy::new(self, second.into_iter(), project)
    }

    /// Inner join with `right` on equal keys, mapping each matching pair
    /// through `selector`.
    fn inner_join<R, K, LK, RK, S, O>(
        self,
        right: R,
        left_key: LK,
        right_key: RK,
        selector: S,
    ) -> InnerJoin<Self, R::IntoIter, K, LK, RK, S>
    where
        Self: Sized,
        R: IntoIterator,
        K: Hash + Eq,
        LK: FnMut(&Self::Item) -> K,
        RK: FnMut(&R::Item) -> K,
        S: FnMut(&Self::Item, &R::Item) -> O,
    {
        InnerJoin::new(self, right.into_iter(), left_key, right_key, selector)
    }

    /// Maps pairs, passing the halves as separate arguments.
    fn map2<A, B, O, F>(self, f: F) -> Map2<Self, F>
    where
        Self: Sized + Iterator<Item = (A, B)>,
        F: FnMut(A, B) -> O,
    {
        Map2::new(self, f)
    }

    /// Maps triples, passing the parts as separate arguments.
    fn map3<A, B, C, O, F>(self, f: F) -> Map3<Self, F>
    where
        Self: Sized + Iterator<Item = (A, B, C)>,
        F: FnMut(A, B, C) -> O,
    {
        Map3::new(self, f)
    }

    /// Runs `action` on each item as it is pulled, passing the item on.
    fn tap<F>(self, action: F) -> Tap<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item),
    {
        Tap::new(self, action)
    }

    /// Consumes the sequence, calling `action` on every item.
    fn each<F>(self, mut action: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        for item in self {
            action(item);
        }
    }
}

impl<I: Iterator + ?Sized> SeqExt for I {}

/// Sequence constructors available on every value.
pub trait ItemExt: Sized {
    /// A sequence holding only `self`.
    fn only(self) -> Once<Self> {
        once(self)
    }

    /// `self` followed by every item of `rest`.
    fn followed_by<I>(self, rest: I) -> Chain<Once<Self>, I::IntoIter>
    where
        I: IntoIterator<Item = Self>,
    {
        once(self).chain(rest)
    }
}

impl<T> ItemExt for T {}
