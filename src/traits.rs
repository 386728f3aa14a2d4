//! Producer/consumer seams for lossy rings.

use alloc::vec::Vec;

/// Size information for a ring.
pub trait RingInfo {
    /// Number of slots.
    fn capacity(&self) -> usize;

    /// Approximate number of queued items.
    fn len(&self) -> usize;

    /// True if nothing is queued.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Non-blocking producer side.
pub trait RingProducer<T> {
    /// Enqueue an item, overwriting the oldest unread one if needed.
    fn offer(&self, item: T);
}

/// Non-blocking consumer side.
pub trait RingConsumer<T> {
    /// Claim the next item, or `None` if none is available.
    fn poll(&self) -> Option<T>;

    /// Claim up to `max` items, stopping at the first empty poll.
    fn poll_list(&self, max: usize) -> Vec<T> {
        let mut items = Vec::new();
        for _ in 0..max {
            match self.poll() {
                Some(item) => items.push(item),
                None => break,
            }
        }
        items
    }
}

impl<T, R: RingProducer<T> + ?Sized> RingProducer<T> for &R {
    #[inline]
    fn offer(&self, item: T) {
        (**self).offer(item);
    }
}

impl<T, R: RingConsumer<T> + ?Sized> RingConsumer<T> for &R {
    #[inline]
    fn poll(&self) -> Option<T> {
        (**self).poll()
    }
}

impl<T, R: RingProducer<T> + ?Sized> RingProducer<T> for alloc::sync::Arc<R> {
    #[inline]
    fn offer(&self, item: T) {
        (**self).offer(item);
    }
}

impl<T, R: RingConsumer<T> + ?Sized> RingConsumer<T> for alloc::sync::Arc<R> {
    #[inline]
    fn poll(&self) -> Option<T> {
        (**self).poll()
    }
}
