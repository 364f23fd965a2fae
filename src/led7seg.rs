//! A device abstraction for a multi-digit 7-segment LED display wired directly to GPIO pins.
//!
//! One set of eight segment lines (A-G plus the decimal point) is shared by up to four
//! digits. Each digit has its own enable line; the driver lights one digit at a time and
//! relies on a fast, periodic [`Led7Seg::refresh`] to make all digits appear lit at once.
//!
//! See [`Led7Seg`] for the main abstraction and
//! [`Led7SegDevice`](crate::led7seg_device::Led7SegDevice) for the version with a
//! background refresh task.

use embedded_hal::digital::OutputPin;

use crate::digits::{DigitValues, MAX_DIGIT_COUNT, MAX_DIGIT_COUNT_U8};
use crate::gpio::{GpioBank, PinId};
use crate::output_array::OutputArray;
use crate::polarity::Polarity;
use crate::segments::{SEGMENT_COUNT, Segments};
use crate::{Error, Result};

#[cfg(feature = "defmt")]
use defmt::info;
#[cfg(feature = "display-trace")]
use defmt::trace;

// ============================================================================
// Constants
// ============================================================================

/// Pin ids for segments A, B, C, D, E, F, G and the decimal point, in that order.
pub type SegmentPins = [PinId; SEGMENT_COUNT];

/// Pin ids for the enable lines of digits 1 through 4. Only the first `digit_count` are used.
pub type DigitPins = [PinId; MAX_DIGIT_COUNT];

// ============================================================================
// Led7Seg
// ============================================================================

/// A multiplexed 7-segment display of one to four digits.
///
/// Digit 1 is the least significant (rightmost) digit.
///
/// # Example
///
/// ```
/// use led7seg::{GpioBank, Led7Seg, PinId, Polarity, Result};
/// # use core::convert::Infallible;
/// # use embedded_hal::digital::{ErrorType, OutputPin, PinState};
/// # struct NullPin;
/// # impl ErrorType for NullPin { type Error = Infallible; }
/// # impl OutputPin for NullPin {
/// #     fn set_low(&mut self) -> core::result::Result<(), Infallible> { Ok(()) }
/// #     fn set_high(&mut self) -> core::result::Result<(), Infallible> { Ok(()) }
/// # }
/// # struct NullGpio;
/// # impl GpioBank for NullGpio {
/// #     type Pin = NullPin;
/// #     fn is_available(&self, _id: PinId) -> bool { true }
/// #     fn open_output(&mut self, _id: PinId, _level: PinState) -> Result<NullPin> { Ok(NullPin) }
/// # }
///
/// # fn main() -> Result<()> {
/// let mut gpio = NullGpio;
/// let mut display = Led7Seg::new(
///     Some(&mut gpio),
///     [5, 6, 7, 8, 9, 10, 11, 12],
///     Polarity::CommonCathode,
/// )?;
/// display.configure_digits(&mut gpio, 4, [1, 2, 3, 4])?;
///
/// // One multiplexing pass over "1234"
/// display.refresh(1234)?;
/// # Ok(())
/// # }
/// ```
pub struct Led7Seg<P> {
    polarity: Polarity,
    segment_pins: OutputArray<P, SEGMENT_COUNT>,
    digit_pins: OutputArray<P, MAX_DIGIT_COUNT>,
    digit_count: u8,
}

impl<P: OutputPin> Led7Seg<P> {
    /// Opens the segment pins and drives every segment dark.
    ///
    /// The display starts as a single digit with no enable lines; call
    /// [`configure_digits`](Self::configure_digits) for multi-digit displays.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HardwareUnavailable`] if `gpio` is `None`, or
    /// [`Error::PinUnavailable`] if a segment pin cannot be opened. On error no pin is taken
    /// from `gpio`.
    pub fn new<G>(gpio: Option<&mut G>, segment_pins: SegmentPins, polarity: Polarity) -> Result<Self>
    where
        G: GpioBank<Pin = P> + ?Sized,
    {
        let gpio = gpio.ok_or(Error::HardwareUnavailable)?;
        let segment_pins = OutputArray::open(gpio, &segment_pins, polarity.segment_level(false))?;
        #[cfg(feature = "defmt")]
        info!("7-segment display opened, polarity: {:?}", polarity);
        Ok(Self {
            polarity,
            segment_pins,
            digit_pins: OutputArray::new(),
            digit_count: 1,
        })
    }

    /// Opens the enable lines of the first `digit_count` digits, all deselected.
    ///
    /// Ids in `digit_pins` past `digit_count` are never opened.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DigitCountOutOfRange`] unless `digit_count` is in `1..=4`,
    /// [`Error::DigitsAlreadyConfigured`] on a second call, or [`Error::PinUnavailable`] if a
    /// digit pin cannot be opened. On error no pin is taken from `gpio`, so the call can be
    /// retried with corrected ids.
    pub fn configure_digits<G>(
        &mut self,
        gpio: &mut G,
        digit_count: u8,
        digit_pins: DigitPins,
    ) -> Result<()>
    where
        G: GpioBank<Pin = P> + ?Sized,
    {
        if !self.digit_pins.is_empty() {
            return Err(Error::DigitsAlreadyConfigured);
        }
        if !(1..=MAX_DIGIT_COUNT_U8).contains(&digit_count) {
            return Err(Error::DigitCountOutOfRange(digit_count));
        }
        let ids = digit_pins
            .get(..usize::from(digit_count))
            .ok_or(Error::DigitCountOutOfRange(digit_count))?;
        self.digit_pins = OutputArray::open(gpio, ids, self.polarity.digit_level(false))?;
        self.digit_count = digit_count;
        #[cfg(feature = "defmt")]
        info!("7-segment display configured with {} digit(s)", digit_count);
        Ok(())
    }

    /// Shows `digit_value` on the 1-based `digit_index`, selecting that digit alone.
    ///
    /// A `digit_index` of 0 or past the configured digit count is ignored. The decimal point
    /// is always driven dark.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDigitValue`] if `digit_value` is not in `0..=9` (no pin is
    /// touched), or [`Error::CannotSetOutputState`] if a pin write fails.
    pub fn write_digit(&mut self, digit_index: u8, digit_value: u8) -> Result<()> {
        let segments = Segments::from_digit(digit_value)?;
        if digit_index == 0 || digit_index > self.digit_count {
            return Ok(());
        }
        #[cfg(feature = "display-trace")]
        trace!("digit {}: {}", digit_index, digit_value);

        self.select_digit(digit_index)?;
        let polarity = self.polarity;
        self.segment_pins
            .set_levels(segments.lit_states().map(|lit| polarity.segment_level(lit)))
    }

    /// One multiplexing pass: writes digits 4, 3, 2 and 1 of `value`, in that order.
    ///
    /// Digits past the configured count are skipped by [`write_digit`](Self::write_digit).
    ///
    /// # Errors
    ///
    /// Returns [`Error::CannotSetOutputState`] if a pin write fails.
    pub fn refresh(&mut self, value: u32) -> Result<()> {
        for (digit_index, digit_value) in DigitValues::from_value(value).refresh_order() {
            self.write_digit(digit_index, digit_value)?;
        }
        Ok(())
    }

    /// Darkens every segment and deselects every digit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CannotSetOutputState`] if a pin write fails.
    pub fn blank(&mut self) -> Result<()> {
        self.segment_pins.set_all(self.polarity.segment_level(false))?;
        self.digit_pins.set_all(self.polarity.digit_level(false))
    }

    #[must_use]
    pub const fn polarity(&self) -> Polarity {
        self.polarity
    }

    #[must_use]
    pub const fn digit_count(&self) -> u8 {
        self.digit_count
    }

    // A single-digit display has its common line wired straight to the supply.
    fn select_digit(&mut self, digit_index: u8) -> Result<()> {
        if self.digit_count == 1 {
            return Ok(());
        }
        let index = usize::from(digit_index).saturating_sub(1);
        self.digit_pins.set_all(self.polarity.digit_level(false))?;
        self.digit_pins
            .set_level_at_index(index, self.polarity.digit_level(true))
    }
}

#[cfg(all(test, not(target_os = "none")))]
mod tests {
    use super::*;
    use embedded_hal::digital::PinState;
    use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction};
    use std::vec::Vec;

    /// Hands out pre-built pin mocks by id; opening a pin applies its initial level.
    struct MockGpio(Vec<(PinId, PinMock)>);

    impl GpioBank for MockGpio {
        type Pin = PinMock;

        fn is_available(&self, id: PinId) -> bool {
            self.0.iter().any(|(pin_id, _)| *pin_id == id)
        }

        fn open_output(&mut self, id: PinId, level: PinState) -> Result<PinMock> {
            let position = self
                .0
                .iter()
                .position(|(pin_id, _)| *pin_id == id)
                .ok_or(Error::PinUnavailable(id))?;
            let (_, mut pin) = self.0.swap_remove(position);
            pin.set_state(level).map_err(|_| Error::CannotSetOutputState)?;
            Ok(pin)
        }
    }

    fn set(state: State) -> Transaction {
        Transaction::set(state)
    }

    #[test]
    fn test_new_without_gpio_is_hardware_unavailable() {
        let result = Led7Seg::<PinMock>::new(
            None::<&mut MockGpio>,
            [0, 1, 2, 3, 4, 5, 6, 7],
            Polarity::CommonAnode,
        );
        assert!(matches!(result, Err(Error::HardwareUnavailable)));
    }

    #[test]
    fn test_new_drives_segments_off_for_common_anode() {
        let mut pins: Vec<PinMock> = (0..8).map(|_| PinMock::new(&[set(State::High)])).collect();
        let mut gpio = MockGpio(pins.iter().cloned().zip(0..).map(|(pin, id)| (id, pin)).collect());

        let display = Led7Seg::new(Some(&mut gpio), [0, 1, 2, 3, 4, 5, 6, 7], Polarity::CommonAnode)
            .expect("all pins available");
        assert_eq!(display.digit_count(), 1);

        pins.iter_mut().for_each(PinMock::done);
    }

    #[test]
    fn test_new_reports_missing_pin() {
        let mut gpio = MockGpio(Vec::new());
        let result = Led7Seg::new(
            Some(&mut gpio),
            [0, 1, 2, 3, 4, 5, 6, 7],
            Polarity::CommonCathode,
        );
        assert!(matches!(result, Err(Error::PinUnavailable(0))));
    }

    #[test]
    fn test_single_digit_write_common_cathode() {
        // '1' lights B and C; common-cathode drives lit segments high.
        let expected_levels = [
            State::Low,
            State::High,
            State::High,
            State::Low,
            State::Low,
            State::Low,
            State::Low,
            State::Low,
        ];
        let mut pins: Vec<PinMock> = expected_levels
            .iter()
            .map(|&level| PinMock::new(&[set(State::Low), set(level)]))
            .collect();
        let mut gpio = MockGpio(pins.iter().cloned().zip(0..).map(|(pin, id)| (id, pin)).collect());

        let mut display =
            Led7Seg::new(Some(&mut gpio), [0, 1, 2, 3, 4, 5, 6, 7], Polarity::CommonCathode)
                .expect("all pins available");
        display.write_digit(1, 1).expect("valid digit");

        pins.iter_mut().for_each(PinMock::done);
    }

    #[test]
    fn test_invalid_digit_value_touches_no_pin() {
        let mut pins: Vec<PinMock> = (0..8).map(|_| PinMock::new(&[set(State::Low)])).collect();
        let mut gpio = MockGpio(pins.iter().cloned().zip(0..).map(|(pin, id)| (id, pin)).collect());

        let mut display =
            Led7Seg::new(Some(&mut gpio), [0, 1, 2, 3, 4, 5, 6, 7], Polarity::CommonCathode)
                .expect("all pins available");
        assert!(matches!(
            display.write_digit(1, 10),
            Err(Error::InvalidDigitValue(10))
        ));

        pins.iter_mut().for_each(PinMock::done);
    }

    #[test]
    fn test_configure_digits_opens_only_counted_pins() {
        let mut segment_pins: Vec<PinMock> =
            (0..8).map(|_| PinMock::new(&[set(State::High)])).collect();
        // Common-anode digit lines idle low.
        let mut digit_pins: Vec<PinMock> = (0..2).map(|_| PinMock::new(&[set(State::Low)])).collect();
        let mut bank: Vec<(PinId, PinMock)> = segment_pins
            .iter()
            .cloned()
            .zip(0..)
            .map(|(pin, id)| (id, pin))
            .collect();
        bank.extend(digit_pins.iter().cloned().zip(20..).map(|(pin, id)| (id, pin)));
        let mut gpio = MockGpio(bank);

        let mut display =
            Led7Seg::new(Some(&mut gpio), [0, 1, 2, 3, 4, 5, 6, 7], Polarity::CommonAnode)
                .expect("all pins available");
        // Ids 22 and 23 do not exist in the bank; they must not be opened.
        display
            .configure_digits(&mut gpio, 2, [20, 21, 22, 23])
            .expect("two digit pins available");
        assert_eq!(display.digit_count(), 2);

        segment_pins.iter_mut().for_each(PinMock::done);
        digit_pins.iter_mut().for_each(PinMock::done);
    }

    #[test]
    fn test_configure_digits_rejects_bad_count_and_second_call() {
        let segment_pins: Vec<PinMock> = (0..8).map(|_| PinMock::new(&[set(State::Low)])).collect();
        let digit_pin = PinMock::new(&[set(State::High)]);
        let mut bank: Vec<(PinId, PinMock)> = segment_pins
            .iter()
            .cloned()
            .zip(0..)
            .map(|(pin, id)| (id, pin))
            .collect();
        bank.push((20, digit_pin.clone()));
        let mut gpio = MockGpio(bank);

        let mut display =
            Led7Seg::new(Some(&mut gpio), [0, 1, 2, 3, 4, 5, 6, 7], Polarity::CommonCathode)
                .expect("all pins available");
        assert!(matches!(
            display.configure_digits(&mut gpio, 0, [20, 21, 22, 23]),
            Err(Error::DigitCountOutOfRange(0))
        ));
        assert!(matches!(
            display.configure_digits(&mut gpio, 5, [20, 21, 22, 23]),
            Err(Error::DigitCountOutOfRange(5))
        ));
        display
            .configure_digits(&mut gpio, 1, [20, 21, 22, 23])
            .expect("one digit pin available");
        assert!(matches!(
            display.configure_digits(&mut gpio, 1, [20, 21, 22, 23]),
            Err(Error::DigitsAlreadyConfigured)
        ));

        for mut pin in segment_pins {
            pin.done();
        }
        let mut digit_pin = digit_pin;
        digit_pin.done();
    }
}
