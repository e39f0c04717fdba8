//! Side-effect hook over a stream.

/// Iterator passing items through unchanged while running an action on each.
///
/// Created by [`SeqExt::tap`](crate::SeqExt::tap).
#[derive(Clone)]
#[must_use = "iterator adapters are lazy and do nothing unless consumed"]
pub struct Tap<I, F> {
    iter: I,
    action: F,
}

impl<I, F> Tap<I, F> {
    pub(crate) fn new(iter: I, action: F) -> Self {
        Tap { iter, action }
    }
}

impl<I, F> Iterator for Tap<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item),
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let item = self.iter.next()?;
        (self.action)(&item);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}
