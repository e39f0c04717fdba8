//! Free-function constructors for small sequences.

use std::iter::{once, Chain, Once};

pub use std::iter::zip;

/// A sequence holding exactly one item.
pub fn only<T>(item: T) -> Once<T> {
    once(item)
}

/// `first` followed by every item of `rest`.
pub fn and<T, I>(first: T, rest: I) -> Chain<Once<T>, I::IntoIter>
where
    I: IntoIterator<Item = T>,
{
    once(first).chain(rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_yields_once() {
        let items: Vec<_> = only("something").collect();
        assert_eq!(items, vec!["something"]);
    }

    #[test]
    fn and_prepends() {
        let items: Vec<_> = and("some", ["thing", "else"]).collect();
        assert_eq!(items, vec!["some", "thing", "else"]);
    }

    #[test]
    fn and_with_empty_rest() {
        let items: Vec<_> = and(1, Vec::new()).collect();
        assert_eq!(items, vec![1]);
    }

    #[test]
    fn zip_truncates_to_shorter() {
        let pairs: Vec<_> = zip([1, 2, 3], ["a", "b"]).collect();
        assert_eq!(pairs, vec![(1, "a"), (2, "b")]);
    }
}
