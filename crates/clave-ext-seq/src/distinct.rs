//! Deduplication and set difference by projected key.
//!
//! Both adapters route every key through a [`KeyEq`], so "same element"
//! always means "same projected key" under the key's own `Eq` and `Hash`.

use std::collections::HashSet;
use std::hash::Hash;

use log::trace;

use crate::key_eq::KeyEq;

/// Iterator yielding the first item seen for each projected key.
///
/// Created by [`SeqExt::distinct_by`](crate::SeqExt::distinct_by).
#[must_use = "iterator adapters are lazy and do nothing unless consumed"]
pub struct DistinctBy<I: Iterator, K, F> {
    iter: I,
    eq: KeyEq<I::Item, K, F>,
    seen: HashSet<K>,
}

impl<I, K, F> DistinctBy<I, K, F>
where
    I: Iterator,
    F: Fn(&I::Item) -> K,
{
    pub(crate) fn new(iter: I, project: F) -> Self {
        DistinctBy {
            iter,
            eq: KeyEq::new(project),
            seen: HashSet::new(),
        }
    }
}

impl<I, K, F> Clone for DistinctBy<I, K, F>
where
    I: Iterator + Clone,
    K: Clone,
    F: Clone,
{
    fn clone(&self) -> Self {
        DistinctBy {
            iter: self.iter.clone(),
            eq: self.eq.clone(),
            seen: self.seen.clone(),
        }
    }
}

impl<I, K, F> Iterator for DistinctBy<I, K, F>
where
    I: Iterator,
    K: Hash + Eq,
    F: Fn(&I::Item) -> K,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let DistinctBy { iter, eq, seen } = self;
        iter.find(|item| seen.insert(eq.key(item)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        (lower.min(1), upper)
    }
}

/// Iterator yielding the items whose key is absent from a second sequence.
///
/// The second sequence is drained into a key set on the first call to
/// `next`, not at construction.
///
/// Created by [`SeqExt::except_by`](crate::SeqExt::except_by).
#[must_use = "iterator adapters are lazy and do nothing unless consumed"]
pub struct ExceptBy<I: Iterator, J, K, F> {
    iter: I,
    second: Option<J>,
    eq: KeyEq<I::Item, K, F>,
    excluded: HashSet<K>,
}

impl<I, J, K, F> ExceptBy<I, J, K, F>
where
    I: Iterator,
    F: Fn(&I::Item) -> K,
{
    pub(crate) fn new(iter: I, second: J, project: F) -> Self {
        ExceptBy {
            iter,
            second: Some(second),
            eq: KeyEq::new(project),
            excluded: HashSet::new(),
        }
    }
}

impl<I, J, K, F> Clone for ExceptBy<I, J, K, F>
where
    I: Iterator + Clone,
    J: Clone,
    K: Clone,
    F: Clone,
{
    fn clone(&self) -> Self {
        ExceptBy {
            iter: self.iter.clone(),
            second: self.second.clone(),
            eq: self.eq.clone(),
            excluded: self.excluded.clone(),
        }
    }
}

impl<I, J, K, F> Iterator for ExceptBy<I, J, K, F>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
    K: Hash + Eq,
    F: Fn(&I::Item) -> K,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let ExceptBy {
            iter,
            second,
            eq,
            excluded,
        } = self;

        if let Some(second) = second.take() {
            excluded.extend(second.map(|item| eq.key(&item)));
            trace!("except_by: excluding {} keys", excluded.len());
        }

        iter.find(|item| !excluded.contains(&eq.key(item)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}
