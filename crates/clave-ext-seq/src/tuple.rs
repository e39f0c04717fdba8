//! Mapping over tuple items with positional arguments.

/// Iterator mapping `(A, B)` items through `FnMut(A, B)`.
///
/// Created by [`SeqExt::map2`](crate::SeqExt::map2).
#[derive(Clone)]
#[must_use = "iterator adapters are lazy and do nothing unless consumed"]
pub struct Map2<I, F> {
    iter: I,
    f: F,
}

impl<I, F> Map2<I, F> {
    pub(crate) fn new(iter: I, f: F) -> Self {
        Map2 { iter, f }
    }
}

impl<I, F, A, B, O> Iterator for Map2<I, F>
where
    I: Iterator<Item = (A, B)>,
    F: FnMut(A, B) -> O,
{
    type Item = O;

    fn next(&mut self) -> Option<O> {
        let (a, b) = self.iter.next()?;
        Some((self.f)(a, b))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// Iterator mapping `(A, B, C)` items through `FnMut(A, B, C)`.
///
/// Created by [`SeqExt::map3`](crate::SeqExt::map3).
#[derive(Clone)]
#[must_use = "iterator adapters are lazy and do nothing unless consumed"]
pub struct Map3<I, F> {
    iter: I,
    f: F,
}

impl<I, F> Map3<I, F> {
    pub(crate) fn new(iter: I, f: F) -> Self {
        Map3 { iter, f }
    }
}

impl<I, F, A, B, C, O> Iterator for Map3<I, F>
where
    I: Iterator<Item = (A, B, C)>,
    F: FnMut(A, B, C) -> O,
{
    type Item = O;

    fn next(&mut self) -> Option<O> {
        let (a, b, c) = self.iter.next()?;
        Some((self.f)(a, b, c))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}
