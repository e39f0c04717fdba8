//! Grouping by a derived property of a key.
//!
//! [`GroupByProp`] groups items by a key, but two keys land in the same group
//! when a second projection of them (the *property*) compares equal. The
//! group is labelled with the first raw key seen for that property.

use std::hash::Hash;

use indexmap::IndexMap;
use log::trace;

use crate::key_eq::KeyEq;

/// A key together with the items grouped under it, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grouping<K, T> {
    key: K,
    items: Vec<T>,
}

impl<K, T> Grouping<K, T> {
    /// Creates an empty group.
    pub fn new(key: K) -> Self {
        Grouping {
            key,
            items: Vec::new(),
        }
    }

    /// Returns the group's key.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns the grouped items.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of items in the group.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the group holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Splits the group into its key and items.
    pub fn into_parts(self) -> (K, Vec<T>) {
        (self.key, self.items)
    }

    fn push(&mut self, item: T) {
        self.items.push(item);
    }
}

impl<K, T> IntoIterator for Grouping<K, T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, K, T> IntoIterator for &'a Grouping<K, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Iterator over [`Grouping`]s keyed by a derived property.
///
/// The source is drained into the group table on the first call to `next`.
///
/// Created by [`SeqExt::group_by_prop`](crate::SeqExt::group_by_prop) and
/// [`SeqExt::group_by_key`](crate::SeqExt::group_by_key).
#[must_use = "iterator adapters are lazy and do nothing unless consumed"]
pub struct GroupByProp<I: Iterator, K, P, KF, PF> {
    source: Option<I>,
    key_fn: KF,
    prop: KeyEq<K, P, PF>,
    groups: Option<std::vec::IntoIter<Grouping<K, I::Item>>>,
}

impl<I, K, P, KF, PF> GroupByProp<I, K, P, KF, PF>
where
    I: Iterator,
    KF: Fn(&I::Item) -> K,
    PF: Fn(&K) -> P,
{
    pub(crate) fn new(source: I, key_fn: KF, prop_fn: PF) -> Self {
        GroupByProp {
            source: Some(source),
            key_fn,
            prop: KeyEq::new(prop_fn),
            groups: None,
        }
    }

    fn build(&mut self, source: I) -> std::vec::IntoIter<Grouping<K, I::Item>>
    where
        P: Hash + Eq,
    {
        let mut table: IndexMap<P, Grouping<K, I::Item>> = IndexMap::new();

        for item in source {
            let key = (self.key_fn)(&item);
            let prop = self.prop.key(&key);
            table
                .entry(prop)
                .or_insert_with(|| Grouping::new(key))
                .push(item);
        }

        trace!("group_by_prop: built {} groups", table.len());
        table.into_values().collect::<Vec<_>>().into_iter()
    }
}

impl<I, K, P, KF, PF> Clone for GroupByProp<I, K, P, KF, PF>
where
    I: Iterator + Clone,
    I::Item: Clone,
    K: Clone,
    KF: Clone,
    PF: Clone,
{
    fn clone(&self) -> Self {
        GroupByProp {
            source: self.source.clone(),
            key_fn: self.key_fn.clone(),
            prop: self.prop.clone(),
            groups: self.groups.clone(),
        }
    }
}

impl<I, K, P, KF, PF> Iterator for GroupByProp<I, K, P, KF, PF>
where
    I: Iterator,
    P: Hash + Eq,
    KF: Fn(&I::Item) -> K,
    PF: Fn(&K) -> P,
{
    type Item = Grouping<K, I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(source) = self.source.take() {
            self.groups = Some(self.build(source));
        }
        self.groups.as_mut()?.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match (&self.source, &self.groups) {
            (_, Some(groups)) => groups.size_hint(),
            (Some(source), None) => (source.size_hint().0.min(1), source.size_hint().1),
            (None, None) => (0, Some(0)),
        }
    }
}
