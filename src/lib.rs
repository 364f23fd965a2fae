//! A multiplexing driver for 1-4 digit 7-segment LED displays wired directly to GPIO pins.
//!
//! The portable core ([`Led7Seg`], [`DisplayValue`]) works with any
//! [`embedded_hal::digital::OutputPin`]. With the `pico1` or `pico2` feature,
//! [`Led7SegDevice`] adds a background refresh task on `embassy_rp`.
#![cfg_attr(not(test), no_std)]

mod digits;
mod display_value;
mod error;
mod gpio;
pub mod led7seg;
#[cfg(feature = "rp")]
pub mod led7seg_device;
mod output_array;
mod polarity;
#[cfg(feature = "rp")]
pub mod rp_gpio;
mod segments;

// Re-export commonly used items
pub use digits::{DigitValues, MAX_DIGIT_COUNT};
pub use display_value::{DisplayValue, RefreshState};
pub use error::{Error, Result};
pub use gpio::{GpioBank, PinId};
pub use led7seg::{DigitPins, Led7Seg, SegmentPins};
#[cfg(feature = "rp")]
pub use led7seg_device::{Led7SegDevice, Led7SegStatic, REFRESH_INTERVAL};
pub use output_array::OutputArray;
pub use polarity::Polarity;
#[cfg(feature = "rp")]
pub use rp_gpio::RpGpio;
pub use segments::{SEGMENT_COUNT, Segments};
