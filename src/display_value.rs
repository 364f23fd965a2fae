//! The value shown by a display, shared between the application and the refresh task.

use embedded_hal::digital::OutputPin;
use portable_atomic::{AtomicBool, AtomicU32, Ordering};

use crate::Result;
use crate::led7seg::Led7Seg;

/// Whether the application has written a value yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RefreshState {
    /// Nothing written yet; ticks render the initial zero as a single "0" on digit 1.
    Idle,
    /// At least one value has been written. There is no way back to `Idle`.
    Active,
}

/// The current value of a display plus its [`RefreshState`].
///
/// Writers and the refresh tick may run in different contexts; the last write wins and is
/// picked up by the next tick.
pub struct DisplayValue {
    value: AtomicU32,
    active: AtomicBool,
}

impl DisplayValue {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            value: AtomicU32::new(0),
            active: AtomicBool::new(false),
        }
    }

    /// Stores `value` for the next tick and marks the display active.
    pub fn write_value(&self, value: u32) {
        self.value.store(value, Ordering::Relaxed);
        self.active.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn current_value(&self) -> u32 {
        self.value.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn refresh_state(&self) -> RefreshState {
        if self.active.load(Ordering::Acquire) {
            RefreshState::Active
        } else {
            RefreshState::Idle
        }
    }

    /// Renders the current value once on `display`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CannotSetOutputState`](crate::Error::CannotSetOutputState) if a pin
    /// write fails.
    pub fn tick<P: OutputPin>(&self, display: &mut Led7Seg<P>) -> Result<()> {
        display.refresh(self.current_value())
    }
}

impl Default for DisplayValue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(test, not(target_os = "none")))]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle_at_zero() {
        let display_value = DisplayValue::new();
        assert_eq!(display_value.current_value(), 0);
        assert_eq!(display_value.refresh_state(), RefreshState::Idle);
    }

    #[test]
    fn test_write_activates_and_last_write_wins() {
        let display_value = DisplayValue::new();
        display_value.write_value(42);
        display_value.write_value(1234);
        assert_eq!(display_value.current_value(), 1234);
        assert_eq!(display_value.refresh_state(), RefreshState::Active);
    }

    #[test]
    fn test_active_is_one_way() {
        let display_value = DisplayValue::new();
        display_value.write_value(0);
        assert_eq!(display_value.refresh_state(), RefreshState::Active);
        display_value.write_value(0);
        assert_eq!(display_value.refresh_state(), RefreshState::Active);
    }
}
