//! Negated and none-dropping filters.

/// Iterator yielding the items a predicate rejects.
///
/// Created by [`SeqExt::where_not`](crate::SeqExt::where_not).
#[derive(Clone)]
#[must_use = "iterator adapters are lazy and do nothing unless consumed"]
pub struct WhereNot<I, P> {
    iter: I,
    predicate: P,
}

impl<I, P> WhereNot<I, P> {
    pub(crate) fn new(iter: I, predicate: P) -> Self {
        WhereNot { iter, predicate }
    }
}

impl<I, P> Iterator for WhereNot<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let predicate = &mut self.predicate;
        self.iter.find(|item| !predicate(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

/// Iterator unwrapping the `Some` items of an iterator of options.
///
/// Created by [`SeqExt::where_not_none`](crate::SeqExt::where_not_none).
#[derive(Clone, Debug)]
#[must_use = "iterator adapters are lazy and do nothing unless consumed"]
pub struct WhereNotNone<I> {
    iter: I,
}

impl<I> WhereNotNone<I> {
    pub(crate) fn new(iter: I) -> Self {
        WhereNotNone { iter }
    }
}

impl<I, T> Iterator for WhereNotNone<I>
where
    I: Iterator<Item = Option<T>>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.iter.find_map(|item| item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

/// Iterator keeping the items whose mapped value is `Some`.
///
/// Created by [`SeqExt::where_not_none_by`](crate::SeqExt::where_not_none_by).
#[derive(Clone)]
#[must_use = "iterator adapters are lazy and do nothing unless consumed"]
pub struct WhereNotNoneBy<I, F> {
    iter: I,
    map: F,
}

impl<I, F> WhereNotNoneBy<I, F> {
    pub(crate) fn new(iter: I, map: F) -> Self {
        WhereNotNoneBy { iter, map }
    }
}

impl<I, F, K> Iterator for WhereNotNoneBy<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> Option<K>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let map = &mut self.map;
        self.iter.find(|item| map(item).is_some())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

#[cfg(test)]
mod tests {
    use crate::{ItemExt, SeqExt};

    #[test]
    fn where_not_drops_matches() {
        let result: Vec<_> = 1i32.followed_by([2, 3, 4]).where_not(|n| n % 2 == 0).collect();
        assert_eq!(result, vec![1, 3]);
    }

    #[test]
    fn where_not_everything_rejected() {
        let result: Vec<i32> = vec![2, 4].into_iter().where_not(|_| true).collect();
        assert!(result.is_empty());
    }

    #[test]
    fn where_not_none_unwraps() {
        let result: Vec<_> = Some("a")
            .followed_by([None, Some("b"), None])
            .where_not_none()
            .collect();
        assert_eq!(result, vec!["a", "b"]);
    }

    #[test]
    fn where_not_none_by_keeps_items() {
        struct Foo {
            prop: Option<&'static str>,
        }

        let items = vec![
            Foo { prop: Some("1") },
            Foo { prop: None },
            Foo { prop: Some("b") },
            Foo { prop: None },
        ];

        let result: Vec<_> = items.iter().where_not_none_by(|f| f.prop).collect();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].prop, Some("1"));
        assert_eq!(result[1].prop, Some("b"));
    }

    #[test]
    fn size_hint_upper_bound_kept() {
        let iter = vec![1, 2, 3].into_iter().where_not(|n| *n > 1);
        assert_eq!(iter.size_hint(), (0, Some(3)));
    }
}
