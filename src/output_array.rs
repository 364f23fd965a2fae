use embedded_hal::digital::{OutputPin, PinState};
use heapless::Vec;

use crate::Result;
use crate::error::Error::{self, CannotSetOutputState};
use crate::gpio::{GpioBank, PinId};

/// Fixed-capacity array of GPIO output pins for LED displays.
///
/// Holds at most `N` pins; only opened pins are stored, so an unopened slot can never be
/// written.
pub struct OutputArray<P, const N: usize>(Vec<P, N>);

impl<P: OutputPin, const N: usize> OutputArray<P, N> {
    /// An array with no pins.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Opens every id in `ids` as an output driven to `level`, in order.
    ///
    /// Every id is checked before the first pin is opened, so a bad id leaves `gpio`
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PinUnavailable`] if a pin is unavailable, repeated in `ids`, or past
    /// the `N` pin capacity.
    pub fn open<G>(gpio: &mut G, ids: &[PinId], level: PinState) -> Result<Self>
    where
        G: GpioBank<Pin = P> + ?Sized,
    {
        for (position, &id) in ids.iter().enumerate() {
            let repeated = ids.iter().take(position).any(|&earlier| earlier == id);
            if position >= N || repeated || !gpio.is_available(id) {
                return Err(Error::PinUnavailable(id));
            }
        }

        let mut outputs = Vec::new();
        for &id in ids {
            let output = gpio.open_output(id, level)?;
            outputs
                .push(output)
                .map_err(|_| Error::PinUnavailable(id))?;
        }
        Ok(Self(outputs))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub(crate) fn set_all(&mut self, level: PinState) -> Result<()> {
        for output in &mut self.0 {
            output.set_state(level).map_err(|_| CannotSetOutputState)?;
        }
        Ok(())
    }

    /// Drives the pin at `index`; an index past the opened pins is ignored.
    #[inline]
    pub(crate) fn set_level_at_index(&mut self, index: usize, level: PinState) -> Result<()> {
        match self.0.get_mut(index) {
            Some(output) => output.set_state(level).map_err(|_| CannotSetOutputState),
            None => Ok(()),
        }
    }

    /// Writes `levels` to the pins from index 0 upward; extra levels or pins are left alone.
    #[inline]
    pub(crate) fn set_levels(&mut self, levels: impl IntoIterator<Item = PinState>) -> Result<()> {
        for (output, level) in self.0.iter_mut().zip(levels) {
            output.set_state(level).map_err(|_| CannotSetOutputState)?;
        }
        Ok(())
    }
}

impl<P: OutputPin, const N: usize> Default for OutputArray<P, N> {
    fn default() -> Self {
        Self::new()
    }
}
