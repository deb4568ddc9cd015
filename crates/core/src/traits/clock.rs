//! Clock-correction sink
//!
//! Writing the correction setting forwards the clipped value to whatever
//! manages the reference clock. The call is one-way: nothing is returned and
//! a failure to apply it is the sink's concern.

/// Receiver for reference-clock corrections in parts per billion
pub trait ClockCorrection {
    /// Apply a new reference correction
    fn set_reference_ppb(&mut self, ppb: i32);
}

/// Discards every correction
impl ClockCorrection for () {
    fn set_reference_ppb(&mut self, _ppb: i32) {}
}

impl<T: ClockCorrection + ?Sized> ClockCorrection for &mut T {
    fn set_reference_ppb(&mut self, ppb: i32) {
        (**self).set_reference_ppb(ppb)
    }
}

// ============================================================================
// Mock Implementation (always available for testing)
// ============================================================================

/// Records the last correction and how many were applied
///
/// # Example
///
/// ```
/// use radio_settings_core::traits::{ClockCorrection, MockClockCorrection};
///
/// let mut clock = MockClockCorrection::new();
/// clock.set_reference_ppb(-1200);
/// assert_eq!(clock.last_ppb(), Some(-1200));
/// assert_eq!(clock.call_count(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MockClockCorrection {
    last_ppb: Option<i32>,
    calls: u32,
}

impl MockClockCorrection {
    /// Creates a mock with no recorded corrections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Last correction received, if any
    pub fn last_ppb(&self) -> Option<i32> {
        self.last_ppb
    }

    /// Number of corrections received
    pub fn call_count(&self) -> u32 {
        self.calls
    }
}

impl ClockCorrection for MockClockCorrection {
    fn set_reference_ppb(&mut self, ppb: i32) {
        self.last_ppb = Some(ppb);
        self.calls += 1;
    }
}
