//! Lossy lock-free multi-producer, multi-consumer ring buffer.
//!
//! [`CoveringRing`] never blocks either side. Producers claim slots from a
//! padded atomic [`Cursor`] and overwrite whatever is there; consumers
//! claim positions with compare-and-swap on a second cursor and report
//! `None` instead of waiting when the next slot is empty.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod cursor;
mod error;
mod iter;
mod ring;
mod slot;
mod traits;


pub use cursor::{CACHE_LINE, Cursor};
pub use error::{CapacityError, capacity_for};
pub use iter::{Drain, PollIter};
pub use ring::CoveringRing;
pub use traits::{RingConsumer, RingInfo, RingProducer};
