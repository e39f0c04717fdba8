//! Sequence operators over futures that resolve to a sequence.
//!
//! Each operator awaits the source future once and then applies the matching
//! synchronous operator to the result. The returned futures are lazy, like
//! every future: nothing runs until they are polled.

use std::future::Future;
use std::iter::{Filter, Map};

use clave_ext_seq::{SeqExt, WhereNot};
use futures::future::{join_all, JoinAll};
use futures::FutureExt;
use log::trace;

/// Operators for a future whose output is a sequence.
///
/// ```
/// use clave_ext::FutureSeqExt;
/// use futures::executor::block_on;
///
/// let numbers = async { vec![1, 2, 3, 4] };
/// let odd = block_on(numbers.where_not(|n| n % 2 == 0).to_list());
/// assert_eq!(odd, vec![1, 3]);
/// ```
pub trait FutureSeqExt<S: IntoIterator>: Future<Output = S> + Sized {
    /// Keeps the items matching `predicate`.
    fn filter_seq<P>(self, predicate: P) -> impl Future<Output = Filter<S::IntoIter, P>>
    where
        P: FnMut(&S::Item) -> bool,
    {
        self.map(move |seq| seq.into_iter().filter(predicate))
    }

    /// Keeps the items not matching `predicate`.
    fn where_not<P>(self, predicate: P) -> impl Future<Output = WhereNot<S::IntoIter, P>>
    where
        P: FnMut(&S::Item) -> bool,
    {
        self.map(move |seq| SeqExt::where_not(seq.into_iter(), predicate))
    }

    /// Maps every item through `f`.
    fn map_seq<B, F>(self, f: F) -> impl Future<Output = Map<S::IntoIter, F>>
    where
        F: FnMut(S::Item) -> B,
    {
        self.map(move |seq| seq.into_iter().map(f))
    }

    /// Collects the sequence into a `Vec`.
    fn to_list(self) -> impl Future<Output = Vec<S::Item>> {
        self.map(|seq| SeqExt::to_list(seq.into_iter()))
    }
}

impl<F, S> FutureSeqExt<S> for F
where
    F: Future<Output = S>,
    S: IntoIterator,
{
}

/// Awaits a whole collection of futures.
pub trait WhenAll<F: Future>: IntoIterator<Item = F> + Sized {
    /// Resolves once every future has, to their outputs in input order.
    ///
    /// The futures are polled concurrently on the current task.
    fn when_all(self) -> JoinAll<F> {
        let futures: Vec<F> = self.into_iter().collect();
        trace!("when_all: awaiting {} futures", futures.len());
        join_all(futures)
    }
}

impl<I, F> WhenAll<F> for I
where
    I: IntoIterator<Item = F>,
    F: Future,
{
}
