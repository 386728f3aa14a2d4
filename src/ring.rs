//! Lossy multi-producer, multi-consumer ring buffer.

use alloc::{boxed::Box, vec::Vec};
use core::fmt;

use tracing::{debug, trace};

use crate::{
    cursor::Cursor,
    error::{CapacityError, capacity_for},
    iter::{Drain, PollIter},
    slot::Slot,
    traits::{RingConsumer, RingInfo, RingProducer},
};

/// Fixed-capacity ring that overwrites unread items instead of blocking.
///
/// Any number of threads may [`offer`](Self::offer) and
/// [`poll`](Self::poll) concurrently through a shared reference (typically
/// an `Arc`). Neither side ever blocks:
///
/// - producers claim the next slot from the write cursor and store into it
///   unconditionally, dropping whatever unread item was there;
/// - consumers claim positions from the read cursor with compare-and-swap,
///   so a given position is handed to at most one consumer.
///
/// If producers outpace consumers, an arbitrary number of items may be lost.
/// There is no exactly-once delivery and no ordering across overwritten data.
///
/// # Example
///
/// ```
/// use covering_ring::CoveringRing;
///
/// let ring = CoveringRing::new(10).unwrap();
/// assert_eq!(ring.capacity(), 16);
///
/// for i in 0..20 {
///     ring.offer(i);
/// }
///
/// // 0..=3 were overwritten by 16..=19.
/// assert_eq!(ring.poll_list(4), vec![16, 17, 18, 19]);
/// assert_eq!(ring.poll(), Some(4));
/// ```
#[repr(C)]
pub struct CoveringRing<T> {
    // Each cursor carries its own cache-line padding.
    write: Cursor,
    read: Cursor,
    buffer: Box<[Slot<T>]>,
}

// Items only ever move in and out by value; no `&T` escapes a shared ring.
unsafe impl<T: Send> Sync for CoveringRing<T> {}

impl<T> CoveringRing<T> {
    /// Create a ring with room for `capacity_hint` items, rounded up to the
    /// next power of two.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] if the hint is zero or no power of two
    /// `>= capacity_hint` fits in a `usize`.
    pub fn new(capacity_hint: usize) -> Result<Self, CapacityError> {
        let capacity = capacity_for(capacity_hint)?;
        let buffer: Box<[Slot<T>]> = (0..capacity).map(|_| Slot::new()).collect();

        debug!(requested = capacity_hint, capacity, "covering ring created");

        Ok(Self {
            write: Cursor::new(capacity),
            read: Cursor::new(capacity),
            buffer,
        })
    }

    /// Enqueue an item. Never blocks, never fails.
    ///
    /// If the target slot still holds an unread item, that item is dropped
    /// here, on the calling thread.
    #[inline]
    pub fn offer(&self, item: T) {
        let index = self.write.increment_and_get();
        drop(self.buffer[index].replace(item));
    }

    /// Claim the next unread item, or `None` if the next slot is empty.
    ///
    /// The read cursor is only advanced past a slot that was observed
    /// occupied; an empty result leaves it in place so a later offer into
    /// that slot is picked up by a later poll.
    ///
    /// Lock-free but not wait-free: each failed compare-and-swap means
    /// another consumer made progress, yet under sustained contention a
    /// single caller can retry indefinitely. Sustained write pressure has
    /// the same effect: offers that keep refilling and overwriting slots
    /// keep the next slot occupied while rivals win the claim, so a polling
    /// consumer may keep retrying without ever returning.
    ///
    /// If a producer overwrites the claimed slot between the occupancy check
    /// and the take, the newer item is returned instead.
    #[inline]
    #[must_use]
    pub fn poll(&self) -> Option<T> {
        loop {
            let current = self.read.get();
            let next = current.wrapping_add(1);
            let slot = &self.buffer[self.read.masked_index(next)];

            // Peek before claiming; an empty slot ends the poll.
            if !slot.is_occupied() {
                return None;
            }
            if !self.read.compare_and_set(current, next) {
                continue;
            }
            // A consumer one lap ahead can empty the slot before we get to
            // it. The position is spent either way; move on to the next one.
            // Only consumers lapping each other on a small ring get here.
            if let Some(item) = slot.take() {
                return Some(item);
            }
        }
    }

    /// Claim up to `max` items in claim order, stopping at the first empty
    /// poll.
    #[must_use]
    pub fn poll_list(&self, max: usize) -> Vec<T> {
        self.iter().take(max).collect()
    }

    /// Iterator that polls until the ring reports empty.
    ///
    /// Each item yielded is consumed from the ring. Not fused: a later
    /// `next()` may succeed again once a producer offers more.
    #[inline]
    pub fn iter(&self) -> PollIter<'_, T> {
        PollIter::new(self)
    }

    /// Enqueue with exclusive access (no atomic overhead).
    #[inline]
    pub fn offer_mut(&mut self, item: T) {
        let tail = self.write.load_mut().wrapping_add(1);
        self.write.store_mut(tail);
        let index = self.write.masked_index(tail);
        drop(self.buffer[index].replace_mut(item));
    }

    /// Claim the next item with exclusive access (no atomic overhead).
    #[inline]
    #[must_use]
    pub fn poll_mut(&mut self) -> Option<T> {
        let next = self.read.load_mut().wrapping_add(1);
        let index = self.read.masked_index(next);
        let item = self.buffer[index].take_mut()?;
        self.read.store_mut(next);
        Some(item)
    }

    /// Drain items in claim order, stopping at the first empty slot.
    ///
    /// Items stranded behind a gap (possible after overwrites) stay queued;
    /// use [`clear`](Self::clear) to discard everything.
    #[inline]
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain::new(self)
    }

    /// Drop every queued item. Returns the number dropped.
    ///
    /// Cursors keep their positions.
    pub fn clear(&mut self) -> usize {
        self.buffer
            .iter_mut()
            .filter_map(Slot::take_mut)
            .count()
    }

    /// Number of slots.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Number of occupied slots.
    ///
    /// A snapshot scan of every slot, so O(capacity) and immediately stale
    /// under concurrent use. Items counted here are not necessarily
    /// reachable by the next poll: after overwrites the read cursor may sit
    /// in front of an empty slot with occupied ones beyond it.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.iter().filter(|slot| slot.is_occupied()).count()
    }

    /// True if no slot is occupied.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.buffer.iter().any(Slot::is_occupied)
    }
}

impl<T> fmt::Debug for CoveringRing<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoveringRing")
            .field("capacity", &self.capacity())
            .field("write_cursor", &(self.write.get() as isize))
            .field("read_cursor", &(self.read.get() as isize))
            .field("occupied", &self.len())
            .finish()
    }
}

impl<T> Extend<T> for CoveringRing<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.offer_mut(item);
        }
    }
}

impl<T> Drop for CoveringRing<T> {
    fn drop(&mut self) {
        let discarded = self.clear();
        if discarded > 0 {
            trace!(discarded, "covering ring dropped with queued items");
        }
    }
}

impl<T> RingInfo for CoveringRing<T> {
    #[inline]
    fn capacity(&self) -> usize {
        CoveringRing::capacity(self)
    }

    #[inline]
    fn len(&self) -> usize {
        CoveringRing::len(self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        CoveringRing::is_empty(self)
    }
}

impl<T> RingProducer<T> for CoveringRing<T> {
    #[inline]
    fn offer(&self, item: T) {
        CoveringRing::offer(self, item);
    }
}

impl<T> RingConsumer<T> for CoveringRing<T> {
    #[inline]
    fn poll(&self) -> Option<T> {
        CoveringRing::poll(self)
    }

    #[inline]
    fn poll_list(&self, max: usize) -> Vec<T> {
        CoveringRing::poll_list(self, max)
    }
}
