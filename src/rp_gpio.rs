//! A [`GpioBank`] over the GPIO pins of an RP2040 / RP2350.
//!
//! `embassy_rp` hands out pins as typed peripherals (`p.PIN_5`). [`RpGpio`] keeps them by
//! number so a display can be wired up from plain pin ids. Build one with [`rp_gpio!`].

use embassy_rp::Peri;
use embassy_rp::gpio::{AnyPin, Level, Output};
use embedded_hal::digital::PinState;

use crate::gpio::{GpioBank, PinId};
use crate::{Error, Result};

#[doc(hidden)]
pub use paste;

/// Number of GPIO pins on the selected chip.
#[cfg(feature = "pico1")]
pub const BANK_SIZE: usize = 30;
#[cfg(all(feature = "pico2", not(feature = "pico1")))]
pub const BANK_SIZE: usize = 48;

/// GPIO pins registered by number, each of which can be opened once.
pub struct RpGpio {
    pins: [Option<Peri<'static, AnyPin>>; BANK_SIZE],
}

impl RpGpio {
    /// A bank with no pins registered.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pins: [const { None }; BANK_SIZE],
        }
    }

    /// Registers `pin` under `id`. Ids past the chip's pin count are dropped.
    #[must_use]
    pub fn with_pin(mut self, id: PinId, pin: Peri<'static, AnyPin>) -> Self {
        if let Some(slot) = self.pins.get_mut(usize::from(id)) {
            *slot = Some(pin);
        }
        self
    }
}

impl Default for RpGpio {
    fn default() -> Self {
        Self::new()
    }
}

impl GpioBank for RpGpio {
    type Pin = Output<'static>;

    fn is_available(&self, id: PinId) -> bool {
        self.pins
            .get(usize::from(id))
            .is_some_and(Option::is_some)
    }

    fn open_output(&mut self, id: PinId, level: PinState) -> Result<Self::Pin> {
        let pin = self
            .pins
            .get_mut(usize::from(id))
            .and_then(Option::take)
            .ok_or(Error::PinUnavailable(id))?;
        Ok(Output::new(pin, Level::from(level == PinState::High)))
    }
}

/// Builds an [`RpGpio`] from `embassy_rp` peripherals and a list of pin numbers.
///
/// ```ignore
/// let p = embassy_rp::init(Default::default());
/// let mut gpio = rp_gpio!(p, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
/// ```
#[macro_export]
macro_rules! rp_gpio {
    ($peripherals:ident, [$($pin:literal),* $(,)?]) => {
        $crate::rp_gpio::paste::paste! {
            $crate::rp_gpio::RpGpio::new()
                $(.with_pin($pin, $peripherals.[<PIN_ $pin>].into()))*
        }
    };
}
