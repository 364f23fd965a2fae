//! A 7-segment display with its own background refresh task.
//!
//! See [`Led7SegDevice`] for usage.

use core::cell::RefCell;

use embassy_executor::Spawner;
use embassy_rp::gpio::Output;
use embassy_sync::blocking_mutex::{Mutex, raw::CriticalSectionRawMutex};
use embassy_time::{Duration, Ticker};

use crate::display_value::{DisplayValue, RefreshState};
use crate::led7seg::{DigitPins, Led7Seg, SegmentPins};
use crate::polarity::Polarity;
use crate::rp_gpio::RpGpio;
use crate::{Error, Result};

#[cfg(feature = "display-trace")]
use defmt::trace;
use defmt::{info, warn};

/// Time between multiplexing passes.
pub const REFRESH_INTERVAL: Duration = Duration::from_millis(1);

/// The display driver type used on RP2040 / RP2350.
pub type RpLed7Seg = Led7Seg<Output<'static>>;

/// Static for the [`Led7SegDevice`] device.
pub struct Led7SegStatic {
    display: Mutex<CriticalSectionRawMutex, RefCell<Option<RpLed7Seg>>>,
    value: DisplayValue,
}

impl Led7SegStatic {
    pub const fn new() -> Self {
        Self {
            display: Mutex::new(RefCell::new(None)),
            value: DisplayValue::new(),
        }
    }

    fn with_display<R>(&self, f: impl FnOnce(&mut RpLed7Seg) -> R) -> Option<R> {
        self.display
            .lock(|cell| cell.borrow_mut().as_mut().map(f))
    }

    fn tick(&self) {
        let result = self.with_display(|display| self.value.tick(display));
        if let Some(Err(err)) = result {
            warn!("7-segment refresh failed: {:?}", err);
        }
    }
}

impl Default for Led7SegStatic {
    fn default() -> Self {
        Self::new()
    }
}

/// A 7-segment display refreshed by a background task.
///
/// Construction opens the segment pins and starts the one refresh task, which renders the
/// current value every [`REFRESH_INTERVAL`] for the rest of the program.
///
/// # Example
///
/// ```no_run
/// #![no_std]
/// #![no_main]
///
/// use led7seg::{Led7SegDevice, Led7SegStatic, Polarity, Result, rp_gpio};
/// # use embassy_executor::Spawner;
/// # use core::panic::PanicInfo;
/// # #[panic_handler]
/// # fn panic(_: &PanicInfo) -> ! { loop {} }
///
/// async fn example(p: embassy_rp::Peripherals, spawner: Spawner) -> Result<()> {
///     let mut gpio = rp_gpio!(p, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
///
///     static LED7SEG_STATIC: Led7SegStatic = Led7SegDevice::new_static();
///     let display = Led7SegDevice::new(
///         &LED7SEG_STATIC,
///         Some(&mut gpio),
///         [5, 6, 7, 8, 9, 10, 11, 12],
///         Polarity::CommonCathode,
///         spawner,
///     )?;
///     display.configure_digits(&mut gpio, 4, [1, 2, 3, 4])?;
///
///     display.write_value(1234);
///     Ok(())
/// }
/// ```
pub struct Led7SegDevice<'a>(&'a Led7SegStatic);

impl Led7SegDevice<'_> {
    /// Creates static resources for the display.
    #[must_use]
    pub const fn new_static() -> Led7SegStatic {
        Led7SegStatic::new()
    }

    /// Opens the segment pins and spawns the refresh task.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HardwareUnavailable`](crate::Error::HardwareUnavailable) if `gpio`
    /// is `None`, [`Error::PinUnavailable`](crate::Error::PinUnavailable) if a segment pin
    /// cannot be opened, or an error if the task cannot be spawned.
    #[must_use = "Must be used to manage the spawned task"]
    pub fn new(
        led7seg_static: &'static Led7SegStatic,
        gpio: Option<&mut RpGpio>,
        segment_pins: SegmentPins,
        polarity: Polarity,
        spawner: Spawner,
    ) -> Result<Self> {
        let display = Led7Seg::new(gpio, segment_pins, polarity)?;
        led7seg_static
            .display
            .lock(|cell| *cell.borrow_mut() = Some(display));
        let token = device_loop(led7seg_static)?;
        spawner.spawn(token);
        Ok(Self(led7seg_static))
    }

    /// Opens the digit enable lines. See [`Led7Seg::configure_digits`].
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Led7Seg::configure_digits`].
    pub fn configure_digits(
        &self,
        gpio: &mut RpGpio,
        digit_count: u8,
        digit_pins: DigitPins,
    ) -> Result<()> {
        self.0
            .with_display(|display| display.configure_digits(gpio, digit_count, digit_pins))
            .unwrap_or(Err(Error::HardwareUnavailable))
    }

    /// Sets the number shown from the next refresh on. Values above 9999 lose their
    /// higher digits.
    pub fn write_value(&self, value: u32) {
        #[cfg(feature = "display-trace")]
        trace!("write_value: {}", value);
        self.0.value.write_value(value);
    }

    /// Writes one digit directly. The next refresh overwrites it.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Led7Seg::write_digit`].
    pub fn write_digit(&self, digit_index: u8, digit_value: u8) -> Result<()> {
        self.0
            .with_display(|display| display.write_digit(digit_index, digit_value))
            .unwrap_or(Err(Error::HardwareUnavailable))
    }

    #[must_use]
    pub fn current_value(&self) -> u32 {
        self.0.value.current_value()
    }

    #[must_use]
    pub fn refresh_state(&self) -> RefreshState {
        self.0.value.refresh_state()
    }
}

#[embassy_executor::task]
async fn device_loop(led7seg_static: &'static Led7SegStatic) -> ! {
    info!("7-segment refresh task started ({} us)", REFRESH_INTERVAL.as_micros());
    if let Some(Err(err)) = led7seg_static.with_display(RpLed7Seg::blank) {
        warn!("7-segment blank failed: {:?}", err);
    }
    let mut ticker = Ticker::every(REFRESH_INTERVAL);
    loop {
        led7seg_static.tick();
        ticker.next().await;
    }
}
