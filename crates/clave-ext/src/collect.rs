//! Bulk insertion and read-only views for the std collections.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::{BuildHasher, Hash};

use indexmap::IndexMap;

/// Adds every item of an iterator to a collection.
///
/// Maps take `(key, value)` pairs; a key that is already present has its
/// value overwritten.
///
/// ```
/// use std::collections::HashMap;
/// use clave_ext::AddItems;
///
/// let mut stock = HashMap::from([("apple", 1)]);
/// stock.add_items([("apple", 5), ("pear", 2)]);
/// stock.add_maybe_items(None::<Vec<(&str, i32)>>);
///
/// assert_eq!(stock["apple"], 5);
/// assert_eq!(stock.len(), 2);
/// ```
pub trait AddItems<T> {
    /// Adds every item.
    fn add_items<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>;

    /// Adds every item when `items` is `Some`, otherwise does nothing.
    fn add_maybe_items<I>(&mut self, items: Option<I>)
    where
        I: IntoIterator<Item = T>,
    {
        if let Some(items) = items {
            self.add_items(items);
        }
    }
}

impl<T> AddItems<T> for Vec<T> {
    fn add_items<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.extend(items);
    }
}

impl<T> AddItems<T> for VecDeque<T> {
    fn add_items<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.extend(items);
    }
}

impl<K, V, S> AddItems<(K, V)> for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn add_items<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in items {
            self.insert(key, value);
        }
    }
}

impl<K: Ord, V> AddItems<(K, V)> for BTreeMap<K, V> {
    fn add_items<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in items {
            self.insert(key, value);
        }
    }
}

impl<K, V, S> AddItems<(K, V)> for IndexMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Overwritten keys keep their original position.
    fn add_items<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in items {
            self.insert(key, value);
        }
    }
}

/// Lookup-only access to a map.
///
/// Object safe, so different map types can be handed out behind
/// `&dyn ReadOnlyMap<K, V>`.
pub trait ReadOnlyMap<K, V> {
    /// The value stored for `key`.
    fn get(&self, key: &K) -> Option<&V>;

    /// Whether `key` is present.
    fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Number of entries.
    fn len(&self) -> usize;

    /// Whether the map has no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The keys, in the map's own iteration order.
    fn keys<'a>(&'a self) -> Box<dyn Iterator<Item = &'a K> + 'a>;
}

impl<K, V, S> ReadOnlyMap<K, V> for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn get(&self, key: &K) -> Option<&V> {
        HashMap::get(self, key)
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn keys<'a>(&'a self) -> Box<dyn Iterator<Item = &'a K> + 'a> {
        Box::new(HashMap::keys(self))
    }
}

impl<K: Ord, V> ReadOnlyMap<K, V> for BTreeMap<K, V> {
    fn get(&self, key: &K) -> Option<&V> {
        BTreeMap::get(self, key)
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn keys<'a>(&'a self) -> Box<dyn Iterator<Item = &'a K> + 'a> {
        Box::new(BTreeMap::keys(self))
    }
}

impl<K, V, S> ReadOnlyMap<K, V> for IndexMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn get(&self, key: &K) -> Option<&V> {
        IndexMap::get(self, key)
    }

    fn len(&self) -> usize {
        IndexMap::len(self)
    }

    fn keys<'a>(&'a self) -> Box<dyn Iterator<Item = &'a K> + 'a> {
        Box::new(IndexMap::keys(self))
    }
}

/// Hands out a map as a [`ReadOnlyMap`] trait object without copying it.
pub trait ToReadOnlyMap<K, V>: ReadOnlyMap<K, V> + Sized {
    /// Borrows `self` as `&dyn ReadOnlyMap<K, V>`.
    fn to_read_only_map(&self) -> &dyn ReadOnlyMap<K, V> {
        self
    }
}

impl<K, V, M: ReadOnlyMap<K, V>> ToReadOnlyMap<K, V> for M {}
