//! Self-healing bounds policy for scalar settings
//!
//! A [`RangeGuard`] describes the valid interval of one setting and the value
//! it falls back to. Writes saturate into the interval, reads of a stored
//! value outside the interval repair it to the reset value.

/// Inclusive bounds plus a reset value for one scalar setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeGuard<T> {
    minimum: T,
    maximum: T,
    reset: T,
}

impl<T: Copy> RangeGuard<T> {
    /// Create a guard for `[minimum, maximum]` that repairs to `reset`
    pub const fn new(minimum: T, maximum: T, reset: T) -> Self {
        Self {
            minimum,
            maximum,
            reset,
        }
    }

    /// Lower bound (inclusive)
    pub const fn minimum(&self) -> T {
        self.minimum
    }

    /// Upper bound (inclusive)
    pub const fn maximum(&self) -> T {
        self.maximum
    }

    /// Value substituted for an out-of-range stored value
    pub const fn reset(&self) -> T {
        self.reset
    }
}

impl<T: Copy + PartialOrd> RangeGuard<T> {
    /// Check if `value` lies within the bounds
    pub fn contains(&self, value: T) -> bool {
        value >= self.minimum && value <= self.maximum
    }

    /// Saturate `value` into the bounds
    pub fn clip(&self, value: T) -> T {
        if value < self.minimum {
            self.minimum
        } else if value > self.maximum {
            self.maximum
        } else {
            value
        }
    }

    /// Replace `value` with the reset value if it lies outside the bounds
    ///
    /// Returns `true` if `value` was rewritten.
    pub fn reset_if_outside(&self, value: &mut T) -> bool {
        if self.contains(*value) {
            false
        } else {
            *value = self.reset;
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TONE_MIX: RangeGuard<i32> = RangeGuard::new(10, 99, 20);

    #[test]
    fn test_clip_saturates() {
        assert_eq!(TONE_MIX.clip(1000), 99);
        assert_eq!(TONE_MIX.clip(-50), 10);
        assert_eq!(TONE_MIX.clip(42), 42);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(TONE_MIX.contains(10));
        assert!(TONE_MIX.contains(99));
        assert!(!TONE_MIX.contains(9));
        assert!(!TONE_MIX.contains(100));
    }

    #[test]
    fn test_reset_if_outside() {
        let mut value = 150;
        assert!(TONE_MIX.reset_if_outside(&mut value));
        assert_eq!(value, 20);

        let mut value = 55;
        assert!(!TONE_MIX.reset_if_outside(&mut value));
        assert_eq!(value, 55);
    }

    #[test]
    fn test_unsigned_guard() {
        let guard: RangeGuard<u32> = RangeGuard::new(10, 60_000, 10_000);
        assert_eq!(guard.clip(0), 10);
        assert_eq!(guard.clip(u32::MAX), 60_000);
    }
}
