//! Cache-line isolated atomic cursor.
//!
//! A [`Cursor`] is a monotonically advancing counter that hands out slot
//! positions to concurrent callers. The raw counter grows without bound
//! (wrapping at `usize::MAX`); the physical slot is derived by masking with
//! `capacity - 1`, so the capacity must be a power of two.

use core::fmt;
use core::sync::atomic::{AtomicUsize, Ordering};

/// Target cache-line size in bytes. 64 bytes is correct for x86-64 and most
/// ARM64 server cores. Adjust if targeting a platform with a different line
/// size (e.g. 128 bytes on Apple M-series, 32 bytes on some embedded cores).
pub const CACHE_LINE: usize = 64;

/// Padding after the hot fields (counter + mask) to close out their line.
const TRAIL_PAD: usize = CACHE_LINE - size_of::<AtomicUsize>() - size_of::<usize>();

/// Atomic counter padded to own a full cache line.
///
/// Layout (`#[repr(C)]`):
///
/// ```text
/// | lead pad (64) | counter | mask | trail pad | = 128 bytes
/// ```
///
/// The leading line keeps whatever the allocator placed before the cursor
/// from sharing a line with the counter; the trailing pad does the same for
/// whatever follows. Two cursors placed side by side in a struct therefore
/// never false-share.
#[repr(C)]
pub struct Cursor {
    _pad_lead: [u8; CACHE_LINE],
    value: AtomicUsize,
    mask: usize,
    _pad_trail: [u8; TRAIL_PAD],
}

impl Cursor {
    /// Starting value, `-1` in two's complement. The first increment wraps it
    /// to `0`, so the first masked index handed out is slot `0`.
    pub const INITIAL: usize = usize::MAX;

    /// Create a cursor at [`INITIAL`](Self::INITIAL) for a ring of
    /// `capacity_bound` slots.
    ///
    /// `capacity_bound` must be a non-zero power of two.
    #[must_use]
    pub const fn new(capacity_bound: usize) -> Self {
        Self::with_value(Self::INITIAL, capacity_bound)
    }

    /// Create a cursor starting at an arbitrary raw value.
    #[must_use]
    pub const fn with_value(start: usize, capacity_bound: usize) -> Self {
        debug_assert!(
            capacity_bound.is_power_of_two(),
            "capacity bound must be power of two"
        );

        Self {
            _pad_lead: [0; CACHE_LINE],
            value: AtomicUsize::new(start),
            mask: capacity_bound.wrapping_sub(1),
            _pad_trail: [0; TRAIL_PAD],
        }
    }

    /// Current raw counter value (Acquire).
    #[inline]
    #[must_use]
    pub fn get(&self) -> usize {
        self.value.load(Ordering::Acquire)
    }

    /// Set the counter to `updated` iff it currently equals `expected`.
    ///
    /// Returns whether the swap happened. Spurious failure is not allowed,
    /// so a `false` always means another thread moved the counter.
    #[inline]
    pub fn compare_and_set(&self, expected: usize, updated: usize) -> bool {
        self.value
            .compare_exchange(expected, updated, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Advance the counter by one and return the masked slot index of the
    /// new value.
    ///
    /// `fetch_add` wraps on overflow; since the capacity divides `2^BITS`,
    /// the masked sequence stays contiguous across the wrap.
    #[inline]
    pub fn increment_and_get(&self) -> usize {
        let prev = self.value.fetch_add(1, Ordering::AcqRel);
        self.masked_index(prev.wrapping_add(1))
    }

    /// `counter & (capacity - 1)`.
    #[inline]
    #[must_use]
    pub const fn masked_index(&self, counter: usize) -> usize {
        counter & self.mask
    }

    /// Load without atomics (exclusive access).
    #[inline]
    pub fn load_mut(&mut self) -> usize {
        *self.value.get_mut()
    }

    /// Store without atomics (exclusive access).
    #[inline]
    pub fn store_mut(&mut self, val: usize) {
        *self.value.get_mut() = val;
    }

    /// The capacity this cursor masks against.
    #[inline]
    #[must_use]
    pub const fn capacity_bound(&self) -> usize {
        self.mask.wrapping_add(1)
    }
}

impl fmt::Debug for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("value", &(self.get() as isize))
            .field("capacity_bound", &self.capacity_bound())
            .finish()
    }
}
