//! Inner join of two sequences on equal keys.

use std::collections::HashMap;
use std::hash::Hash;

use log::trace;

/// Iterator over the matching pairs of two sequences.
///
/// The right-hand sequence is drained into a key lookup on the first call to
/// `next`. Results come in left order, and for each left item the matching
/// right items come in right order.
///
/// Created by [`SeqExt::inner_join`](crate::SeqExt::inner_join).
#[must_use = "iterator adapters are lazy and do nothing unless consumed"]
pub struct InnerJoin<L: Iterator, R: Iterator, K, LK, RK, S> {
    left: L,
    right: Option<R>,
    left_key: LK,
    right_key: RK,
    selector: S,
    lookup: HashMap<K, Vec<R::Item>>,
    current: Option<(L::Item, K)>,
    pos: usize,
}

impl<L, R, K, LK, RK, S> InnerJoin<L, R, K, LK, RK, S>
where
    L: Iterator,
    R: Iterator,
{
    pub(crate) fn new(left: L, right: R, left_key: LK, right_key: RK, selector: S) -> Self {
        InnerJoin {
            left,
            right: Some(right),
            left_key,
            right_key,
            selector,
            lookup: HashMap::new(),
            current: None,
            pos: 0,
        }
    }
}

impl<L, R, K, LK, RK, S> Clone for InnerJoin<L, R, K, LK, RK, S>
where
    L: Iterator + Clone,
    L::Item: Clone,
    R: Iterator + Clone,
    R::Item: Clone,
    K: Clone,
    LK: Clone,
    RK: Clone,
    S: Clone,
{
    fn clone(&self) -> Self {
        InnerJoin {
            left: self.left.clone(),
            right: self.right.clone(),
            left_key: self.left_key.clone(),
            right_key: self.right_key.clone(),
            selector: self.selector.clone(),
            lookup: self.lookup.clone(),
            current: self.current.clone(),
            pos: self.pos,
        }
    }
}

impl<L, R, K, LK, RK, S, O> Iterator for InnerJoin<L, R, K, LK, RK, S>
where
    L: Iterator,
    R: Iterator,
    K: Hash + Eq,
    LK: FnMut(&L::Item) -> K,
    RK: FnMut(&R::Item) -> K,
    S: FnMut(&L::Item, &R::Item) -> O,
{
    type Item = O;

    fn next(&mut self) -> Option<O> {
        if let Some(right) = self.right.take() {
            for item in right {
                let key = (self.right_key)(&item);
                self.lookup.entry(key).or_default().push(item);
            }
            trace!("inner_join: lookup holds {} keys", self.lookup.len());
        }

        loop {
            if let Some((item, key)) = &self.current {
                let pos = self.pos;
                if let Some(right) = self.lookup.get(key).and_then(|matches| matches.get(pos)) {
                    self.pos += 1;
                    return Some((self.selector)(item, right));
                }
            }

            let item = self.left.next()?;
            let key = (self.left_key)(&item);
            self.current = Some((item, key));
            self.pos = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::SeqExt;

    #[derive(Debug)]
    struct Order {
        id: u32,
        customer: &'static str,
    }

    #[derive(Debug)]
    struct Customer {
        name: &'static str,
        city: &'static str,
    }

    fn orders() -> Vec<Order> {
        vec![
            Order {
                id: 1,
                customer: "ada",
            },
            Order {
                id: 2,
                customer: "bob",
            },
            Order {
                id: 3,
                customer: "ada",
            },
            Order {
                id: 4,
                customer: "nobody",
            },
        ]
    }

    fn customers() -> Vec<Customer> {
        vec![
            Customer {
                name: "ada",
                city: "London",
            },
            Customer {
                name: "bob",
                city: "Oslo",
            },
            Customer {
                name: "ada",
                city: "Paris",
            },
        ]
    }

    #[test]
    fn pairs_in_left_then_right_order() {
        let result: Vec<_> = orders()
            .into_iter()
            .inner_join(
                customers(),
                |o| o.customer,
                |c| c.name,
                |o, c| (o.id, c.city),
            )
            .collect();

        assert_eq!(
            result,
            vec![
                (1, "London"),
                (1, "Paris"),
                (2, "Oslo"),
                (3, "London"),
                (3, "Paris"),
            ]
        );
    }

    #[test]
    fn unmatched_left_items_are_dropped() {
        let result: Vec<_> = orders()
            .into_iter()
            .inner_join(Vec::<Customer>::new(), |o| o.customer, |c| c.name, |o, _| o.id)
            .collect();

        assert!(result.is_empty());
    }

    #[test]
    fn clone_mid_match_resumes_there() {
        let mut joined = vec![1, 2]
            .into_iter()
            .inner_join(vec![(1, 'a'), (1, 'b'), (2, 'c')], |l| *l, |r| r.0, |l, r| (*l, r.1));
        assert_eq!(joined.next(), Some((1, 'a')));

        let copy = joined.clone();
        assert_eq!(joined.collect::<Vec<_>>(), vec![(1, 'b'), (2, 'c')]);
        assert_eq!(copy.collect::<Vec<_>>(), vec![(1, 'b'), (2, 'c')]);
    }

    #[test]
    fn construction_does_not_pull() {
        let poisoned = || std::iter::from_fn(|| -> Option<i32> { panic!("source pulled") });
        let _join = poisoned().inner_join(poisoned(), |l| *l, |r| *r, |l, r| l + r);
    }
}
