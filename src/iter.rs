//! Iterators over CoveringRing.

use crate::ring::CoveringRing;

/// Polling iterator over a shared [`CoveringRing`].
///
/// Yields consumed items until a poll comes back empty. Safe to use from
/// several threads at once, each with its own iterator.
pub struct PollIter<'a, T> {
    ring: &'a CoveringRing<T>,
}

impl<'a, T> PollIter<'a, T> {
    pub(crate) fn new(ring: &'a CoveringRing<T>) -> Self {
        Self { ring }
    }
}

impl<T> Iterator for PollIter<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.ring.poll()
    }
}

/// Draining iterator over an exclusively borrowed [`CoveringRing`].
pub struct Drain<'a, T> {
    ring: &'a mut CoveringRing<T>,
}

impl<'a, T> Drain<'a, T> {
    pub(crate) fn new(ring: &'a mut CoveringRing<T>) -> Self {
        Self { ring }
    }
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.ring.poll_mut()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.ring.capacity()))
    }
}
