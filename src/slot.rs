//! Single storage position of the ring.

use alloc::boxed::Box;
use core::{
    marker::PhantomData,
    ptr,
    sync::atomic::{AtomicPtr, Ordering},
};

/// One ring slot: empty (null) or owning exactly one boxed value.
///
/// Ownership of the value moves only through `swap`, so a value is held by
/// at most one party at any time: the slot, the producer that displaced it,
/// or the consumer that took it.
pub(crate) struct Slot<T> {
    ptr: AtomicPtr<T>,
    _owns: PhantomData<Box<T>>,
}

impl<T> Slot<T> {
    pub(crate) const fn new() -> Self {
        Self {
            ptr: AtomicPtr::new(ptr::null_mut()),
            _owns: PhantomData,
        }
    }

    /// Store `value`, returning the occupant it displaced (if any).
    ///
    /// Release publishes the boxed contents to whichever consumer later
    /// takes the pointer with Acquire.
    #[inline]
    pub(crate) fn replace(&self, value: T) -> Option<T> {
        let new = Box::into_raw(Box::new(value));
        let old = self.ptr.swap(new, Ordering::AcqRel);
        // Safety: non-null pointers in a slot always come from
        // `Box::into_raw` above, and the swap made us their sole owner.
        unsafe { Self::reclaim(old) }
    }

    /// Whether the slot currently holds a value. Never dereferences.
    #[inline]
    pub(crate) fn is_occupied(&self) -> bool {
        !self.ptr.load(Ordering::Acquire).is_null()
    }

    /// Take the occupant, leaving the slot empty.
    #[inline]
    pub(crate) fn take(&self) -> Option<T> {
        let old = self.ptr.swap(ptr::null_mut(), Ordering::AcqRel);
        // Safety: see `replace`.
        unsafe { Self::reclaim(old) }
    }

    /// Store through exclusive access, no atomic RMW.
    #[inline]
    pub(crate) fn replace_mut(&mut self, value: T) -> Option<T> {
        let new = Box::into_raw(Box::new(value));
        let old = core::mem::replace(self.ptr.get_mut(), new);
        // Safety: see `replace`.
        unsafe { Self::reclaim(old) }
    }

    /// Take the occupant through exclusive access, no atomic RMW.
    #[inline]
    pub(crate) fn take_mut(&mut self) -> Option<T> {
        let old = core::mem::replace(self.ptr.get_mut(), ptr::null_mut());
        // Safety: see `replace`.
        unsafe { Self::reclaim(old) }
    }

    /// # Safety
    /// `raw` must be null or a pointer from `Box::into_raw` that no other
    /// party can still reach.
    #[inline]
    unsafe fn reclaim(raw: *mut T) -> Option<T> {
        if raw.is_null() {
            None
        } else {
            Some(*unsafe { Box::from_raw(raw) })
        }
    }
}

impl<T> Drop for Slot<T> {
    fn drop(&mut self) {
        drop(self.take_mut());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;

    #[test]
    fn test_replace_and_take() {
        let slot = Slot::new();
        assert!(!slot.is_occupied());
        assert_eq!(slot.replace(1u32), None);
        assert!(slot.is_occupied());
        assert_eq!(slot.replace(2), Some(1));
        assert_eq!(slot.take(), Some(2));
        assert!(!slot.is_occupied());
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn test_drop_releases_occupant() {
        let tracker = Rc::new(());
        {
            let slot = Slot::new();
            slot.replace(Rc::clone(&tracker));
            assert_eq!(Rc::strong_count(&tracker), 2);
        }
        assert_eq!(Rc::strong_count(&tracker), 1);
    }
}
