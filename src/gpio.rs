//! Access to GPIO pins by numeric id.
//!
//! The driver never names a concrete HAL type; it asks a [`GpioBank`] for output pins by
//! number. Firmware uses [`RpGpio`](crate::rp_gpio::RpGpio); tests use fakes.

use embedded_hal::digital::{OutputPin, PinState};

use crate::Result;

/// Platform-specific numeric pin identifier (the GPIO number on RP2040/RP2350).
pub type PinId = u8;

/// A GPIO controller that hands out pins as outputs by number.
pub trait GpioBank {
    /// The output pin type this bank produces.
    type Pin: OutputPin;

    /// Whether pin `id` exists on this bank and has not been opened yet.
    fn is_available(&self, id: PinId) -> bool;

    /// Opens pin `id` as a push-pull output already driven to `level`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PinUnavailable`](crate::Error::PinUnavailable) if the pin does not
    /// exist on this bank or has already been opened.
    fn open_output(&mut self, id: PinId, level: PinState) -> Result<Self::Pin>;
}

impl<G: GpioBank + ?Sized> GpioBank for &mut G {
    type Pin = G::Pin;

    fn is_available(&self, id: PinId) -> bool {
        (**self).is_available(id)
    }

    fn open_output(&mut self, id: PinId, level: PinState) -> Result<Self::Pin> {
        (**self).open_output(id, level)
    }
}
