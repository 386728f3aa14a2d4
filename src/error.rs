//! Construction-time configuration errors.

use snafu::{OptionExt, Snafu, ensure};

/// Invalid capacity requested for a ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Snafu)]
pub enum CapacityError {
    /// A ring needs at least one slot.
    #[snafu(display("capacity must be > 0"))]
    Zero,

    /// No power of two `>= requested` fits in a `usize`.
    #[snafu(display("capacity {requested} has no power of two that fits in usize"))]
    TooLarge {
        /// Capacity hint the caller passed.
        requested: usize,
    },
}

/// Smallest power of two that is `>= hint`.
///
/// # Errors
///
/// [`CapacityError::Zero`] for a zero hint, [`CapacityError::TooLarge`] when
/// rounding up would overflow `usize`.
///
/// # Example
///
/// ```
/// use covering_ring::capacity_for;
///
/// assert_eq!(capacity_for(10), Ok(16));
/// assert_eq!(capacity_for(16), Ok(16));
/// assert_eq!(capacity_for(1), Ok(1));
/// ```
pub fn capacity_for(hint: usize) -> Result<usize, CapacityError> {
    ensure!(hint > 0, ZeroSnafu);

    hint.checked_next_power_of_two().context(TooLargeSnafu { requested: hint })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    const TOP_POWER: usize = 1 << (usize::BITS - 1);

    #[test]
    fn test_capacity_rounding() {
        assert_eq!(capacity_for(1), Ok(1));
        assert_eq!(capacity_for(2), Ok(2));
        assert_eq!(capacity_for(3), Ok(4));
        assert_eq!(capacity_for(10), Ok(16));
        assert_eq!(capacity_for(1000), Ok(1024));
        assert_eq!(capacity_for((1 << 24) + 1), Ok(1 << 25));
        assert_eq!(capacity_for(TOP_POWER - 1), Ok(TOP_POWER));
        assert_eq!(capacity_for(TOP_POWER), Ok(TOP_POWER));
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert_eq!(capacity_for(0), Err(CapacityError::Zero));
    }

    #[test]
    fn test_only_overflowing_capacity_rejected() {
        assert_eq!(
            capacity_for(TOP_POWER + 1),
            Err(CapacityError::TooLarge {
                requested: TOP_POWER + 1,
            })
        );
        assert_eq!(
            capacity_for(usize::MAX),
            Err(CapacityError::TooLarge {
                requested: usize::MAX,
            })
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(CapacityError::Zero.to_string(), "capacity must be > 0");
        let err = capacity_for(usize::MAX).unwrap_err();
        assert_eq!(
            err.to_string(),
            alloc::format!("capacity {} has no power of two that fits in usize", usize::MAX)
        );
    }
}
